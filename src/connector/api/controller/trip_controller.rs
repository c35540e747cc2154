use anyhow::Result;

use crate::cli::{TripCommand, TripSearchArgs};
use crate::domain::{NewTrip, TripSearch, TripUpdate};

use super::super::Container;
use super::output::{format_trip, format_trip_page, format_trips};

pub struct TripController<'a> {
    container: &'a Container,
}

impl<'a> TripController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn handle(&self, command: TripCommand) -> Result<String> {
        let use_case = self.container.trips_use_case();

        let trip = match command {
            TripCommand::Search { search } => {
                let page = use_case.search(&to_search(search)).await?;
                return Ok(format_trip_page(&page));
            }
            TripCommand::Mine => {
                let trips = use_case.list_mine().await?;
                return Ok(format_trips(&trips, "You have not published any trips."));
            }
            TripCommand::Delete { id } => {
                use_case.delete(&id).await?;
                return Ok("Trip deleted.".to_string());
            }
            TripCommand::Show { id } => use_case.get(&id).await?,
            TripCommand::Publish {
                vehicle,
                origin,
                destination,
                date,
                time,
                seats,
                price,
                payment_methods,
                notes,
            } => {
                let trip = NewTrip {
                    vehicle_id: vehicle,
                    origin,
                    destination,
                    origin_latitude: None,
                    origin_longitude: None,
                    destination_latitude: None,
                    destination_longitude: None,
                    date,
                    time,
                    total_seats: seats,
                    price,
                    payment_methods: (!payment_methods.is_empty()).then_some(payment_methods),
                    notes,
                };
                use_case.create(&trip).await?
            }
            TripCommand::Update {
                id,
                origin,
                destination,
                date,
                time,
                price,
                notes,
            } => {
                let update = TripUpdate {
                    origin,
                    destination,
                    date,
                    time,
                    price,
                    notes,
                };
                use_case.update(&id, &update).await?
            }
            TripCommand::Cancel { id } => use_case.cancel(&id).await?,
            TripCommand::Start { id } => use_case.start(&id).await?,
            TripCommand::Complete { id } => use_case.complete(&id).await?,
        };

        Ok(format_trip(&trip))
    }
}

pub fn to_search(args: TripSearchArgs) -> TripSearch {
    TripSearch {
        origin: args.origin,
        destination: args.destination,
        date: args.date,
        time: args.time,
        min_price: args.min_price,
        max_price: args.max_price,
        page: args.page,
        limit: args.limit,
    }
}
