use anyhow::Result;

use crate::cli::TripSearchArgs;

use super::super::Container;
use super::output::{format_trip_page, format_user, format_vehicles};
use super::trip_controller::to_search;

pub struct DashboardController<'a> {
    container: &'a Container,
}

impl<'a> DashboardController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn show(&self, search: TripSearchArgs) -> Result<String> {
        let dashboard = self
            .container
            .dashboard_use_case()
            .execute(&to_search(search))
            .await?;

        Ok(format!(
            "{}\n{}\n\n{}",
            format_user(&dashboard.profile),
            format_vehicles(&dashboard.vehicles),
            format_trip_page(&dashboard.trips)
        ))
    }
}
