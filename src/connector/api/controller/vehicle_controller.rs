use anyhow::Result;

use crate::cli::VehicleCommand;
use crate::domain::{NewVehicle, VehicleUpdate};

use super::super::Container;
use super::output::{format_vehicle, format_vehicles};

pub struct VehicleController<'a> {
    container: &'a Container,
}

impl<'a> VehicleController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn handle(&self, command: VehicleCommand) -> Result<String> {
        let use_case = self.container.vehicles_use_case();

        let vehicle = match command {
            VehicleCommand::List => {
                let vehicles = use_case.list_mine().await?;
                return Ok(format_vehicles(&vehicles));
            }
            VehicleCommand::Delete { id } => {
                use_case.delete(&id).await?;
                return Ok("Vehicle deleted.".to_string());
            }
            VehicleCommand::Add {
                make,
                model,
                year,
                color,
                plates,
                capacity,
            } => {
                use_case
                    .create(&NewVehicle {
                        make,
                        model,
                        year,
                        color,
                        plates,
                        passenger_capacity: capacity,
                    })
                    .await?
            }
            VehicleCommand::Update {
                id,
                make,
                model,
                year,
                color,
                plates,
                capacity,
            } => {
                let update = VehicleUpdate {
                    make,
                    model,
                    year,
                    color,
                    plates,
                    passenger_capacity: capacity,
                };
                use_case.update(&id, &update).await?
            }
            VehicleCommand::Primary { id } => use_case.set_primary(&id).await?,
            VehicleCommand::Enable { id } => use_case.set_active(&id, true).await?,
            VehicleCommand::Disable { id } => use_case.set_active(&id, false).await?,
        };

        Ok(format_vehicle(&vehicle))
    }
}
