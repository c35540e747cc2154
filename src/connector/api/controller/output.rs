//! Plain-text rendering shared by the controllers.

use crate::domain::{Reservation, Trip, TripPage, User, UserStats, Vehicle};

pub fn format_user(user: &User) -> String {
    let mut output = format!("{} <{}>\n", user.full_name(), user.email);
    output.push_str(&format!("  Id: {}\n", user.id));
    output.push_str(&format!("  Role: {}\n", user.role));
    if let Some(degree) = &user.degree {
        output.push_str(&format!("  Degree: {}\n", degree));
    }
    if let Some(campus) = &user.campus {
        output.push_str(&format!("  Campus: {}\n", campus));
    }
    if let Some(phone) = &user.phone {
        output.push_str(&format!("  Phone: {}\n", phone));
    }
    output.push_str(&format!(
        "  Rating: {:.1} ({} trips)\n",
        user.rating(),
        user.total_trips()
    ));
    if !user.registration_complete {
        output.push_str("  Registration incomplete: run `leoneta profile complete`\n");
    }
    output
}

pub fn format_stats(stats: &UserStats) -> String {
    let rating = if stats.has_ratings() {
        format!("{:.1} from {} ratings", stats.average_rating, stats.rating_count)
    } else {
        "no ratings yet".to_string()
    };

    format!(
        "Rating:             {}\nTrips as driver:    {}\nTrips as passenger: {}",
        rating, stats.trips_as_driver, stats.trips_as_passenger
    )
}

pub fn format_vehicle(vehicle: &Vehicle) -> String {
    let mut flags = Vec::new();
    if vehicle.primary {
        flags.push("primary");
    }
    if !vehicle.active {
        flags.push("inactive");
    }
    if vehicle.verified {
        flags.push("verified");
    }

    let mut output = format!("  {} ({})", vehicle.label(), vehicle.id);
    if !flags.is_empty() {
        output.push_str(&format!(" [{}]", flags.join(", ")));
    }
    output.push_str(&format!(
        "\n    Seats: {}, Plates: {}\n",
        vehicle.passenger_capacity,
        vehicle.plates.as_deref().unwrap_or("-")
    ));
    output
}

pub fn format_vehicles(vehicles: &[Vehicle]) -> String {
    if vehicles.is_empty() {
        return "No vehicles registered.".to_string();
    }

    let mut output = "Your vehicles:\n\n".to_string();
    for vehicle in vehicles {
        output.push_str(&format_vehicle(vehicle));
    }
    output
}

pub fn format_trip(trip: &Trip) -> String {
    let mut output = format!("  {} ({})\n", trip.route_label(), trip.id);
    output.push_str(&format!(
        "    {} {} | ${:.2} | {}/{} seats free | {}\n",
        trip.date, trip.time, trip.price, trip.available_seats, trip.total_seats, trip.status
    ));
    output.push_str(&format!("    Driver: {}\n", trip.driver_name()));
    if !trip.payment_methods.is_empty() {
        output.push_str(&format!("    Payment: {}\n", trip.payment_methods.join(", ")));
    }
    if let Some(notes) = &trip.notes {
        output.push_str(&format!("    Notes: {}\n", notes));
    }
    output
}

pub fn format_trips(trips: &[Trip], empty: &str) -> String {
    if trips.is_empty() {
        return empty.to_string();
    }

    let mut output = String::new();
    for trip in trips {
        output.push_str(&format_trip(trip));
        output.push('\n');
    }
    output
}

pub fn format_trip_page(page: &TripPage) -> String {
    if page.data.is_empty() {
        return "No trips found.".to_string();
    }

    let mut output = format!(
        "Found {} trips (page {}, {} per page):\n\n",
        page.total, page.page, page.limit
    );
    output.push_str(&format_trips(&page.data, ""));
    output
}

pub fn format_reservation(reservation: &Reservation) -> String {
    let mut output = format!(
        "  {} [{}] {} seat(s)\n",
        reservation.id, reservation.status, reservation.seats
    );
    match &reservation.trip {
        Some(trip) => output.push_str(&format!(
            "    Trip: {} on {} {}\n",
            trip.route_label(),
            trip.date,
            trip.time
        )),
        None => output.push_str(&format!("    Trip: {}\n", reservation.trip_id)),
    }
    if let Some(passenger) = &reservation.passenger {
        output.push_str(&format!("    Passenger: {}\n", passenger.full_name()));
    }
    output.push_str(&format!(
        "    Meeting point: {}\n",
        reservation.meeting_point_label()
    ));
    if let Some(message) = &reservation.passenger_message {
        output.push_str(&format!("    Passenger says: {}\n", message));
    }
    if let Some(message) = &reservation.driver_message {
        output.push_str(&format!("    Driver says: {}\n", message));
    }
    output
}

pub fn format_reservations(reservations: &[Reservation], empty: &str) -> String {
    if reservations.is_empty() {
        return empty.to_string();
    }

    let mut output = String::new();
    for reservation in reservations {
        output.push_str(&format_reservation(reservation));
        output.push('\n');
    }
    output
}
