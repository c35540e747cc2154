use anyhow::Result;

use crate::cli::ReservationCommand;
use crate::domain::NewReservation;

use super::super::Container;
use super::output::{format_reservation, format_reservations};

pub struct ReservationController<'a> {
    container: &'a Container,
}

impl<'a> ReservationController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn handle(&self, command: ReservationCommand) -> Result<String> {
        let use_case = self.container.reservations_use_case();

        let reservation = match command {
            ReservationCommand::Mine => {
                let reservations = use_case.list_mine().await?;
                return Ok(format_reservations(&reservations, "You have no reservations."));
            }
            ReservationCommand::Trip { trip_id } => {
                let reservations = use_case.list_for_trip(&trip_id).await?;
                return Ok(format_reservations(
                    &reservations,
                    "No reservations for this trip.",
                ));
            }
            ReservationCommand::Delete { id } => {
                use_case.delete(&id).await?;
                return Ok("Reservation deleted.".to_string());
            }
            ReservationCommand::Book {
                trip_id,
                seats,
                meeting_point,
                message,
            } => {
                let mut booking = NewReservation::new(trip_id);
                booking.seats = seats;
                booking.meeting_point = meeting_point;
                booking.passenger_message = message;
                use_case.create(&booking).await?
            }
            ReservationCommand::Confirm { id, message } => {
                use_case.confirm(&id, message.as_deref()).await?
            }
            ReservationCommand::Reject { id, message } => {
                use_case.reject(&id, message.as_deref()).await?
            }
            ReservationCommand::Cancel { id } => use_case.cancel(&id).await?,
            ReservationCommand::Complete { id } => use_case.complete(&id).await?,
        };

        Ok(format_reservation(&reservation))
    }
}
