use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in, sign out and inspect the current session
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Read and update user profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Manage your vehicles
    Vehicles {
        #[command(subcommand)]
        command: VehicleCommand,
    },

    /// Search, publish and run trips
    Trips {
        #[command(subcommand)]
        command: TripCommand,
    },

    /// Book seats and answer booking requests
    Reservations {
        #[command(subcommand)]
        command: ReservationCommand,
    },

    /// Trip search, profile and vehicles in one view
    Dashboard {
        #[command(flatten)]
        search: TripSearchArgs,
    },
}

#[derive(Subcommand)]
pub enum AuthCommand {
    Login {
        email: String,

        #[arg(short, long)]
        password: String,
    },

    Register {
        email: String,

        #[arg(short, long)]
        password: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        degree: Option<String>,
    },

    /// Show the logged-in user
    Me,

    Logout,

    /// Print the URL that starts a Google sign-in
    GoogleUrl,

    /// Finish a Google sign-in from the redirect URL
    Callback { url: String },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show a profile (defaults to your own)
    Show { id: Option<String> },

    Update {
        #[command(flatten)]
        fields: ProfileFields,
    },

    /// Finish the second registration step
    Complete {
        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        student_code: Option<String>,

        #[command(flatten)]
        fields: ProfileFields,
    },

    /// Rating and trip counters (defaults to your own)
    Stats { id: Option<String> },

    Password {
        #[arg(long)]
        current: String,

        #[arg(long)]
        new: String,
    },

    Photo { url: String },
}

#[derive(Args, Default)]
pub struct ProfileFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub gender: Option<String>,

    #[arg(long)]
    pub degree: Option<String>,

    #[arg(long)]
    pub campus: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub about: Option<String>,
}

#[derive(Subcommand)]
pub enum VehicleCommand {
    List,

    Add {
        make: String,

        model: String,

        year: u16,

        color: String,

        #[arg(long)]
        plates: Option<String>,

        #[arg(long)]
        capacity: Option<u8>,
    },

    Update {
        id: String,

        #[arg(long)]
        make: Option<String>,

        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        year: Option<u16>,

        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        plates: Option<String>,

        #[arg(long)]
        capacity: Option<u8>,
    },

    /// Make a vehicle your default for new trips
    Primary { id: String },

    Enable { id: String },

    Disable { id: String },

    Delete { id: String },
}

#[derive(Args, Default)]
pub struct TripSearchArgs {
    #[arg(long)]
    pub origin: Option<String>,

    #[arg(long)]
    pub destination: Option<String>,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub time: Option<String>,

    #[arg(long)]
    pub min_price: Option<f64>,

    #[arg(long)]
    pub max_price: Option<f64>,

    #[arg(long)]
    pub page: Option<u32>,

    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Subcommand)]
pub enum TripCommand {
    Search {
        #[command(flatten)]
        search: TripSearchArgs,
    },

    Show { id: String },

    /// Trips you published as a driver
    Mine,

    Publish {
        #[arg(long)]
        vehicle: String,

        #[arg(long)]
        origin: String,

        #[arg(long)]
        destination: String,

        #[arg(long)]
        date: String,

        #[arg(long)]
        time: String,

        #[arg(long)]
        seats: u8,

        #[arg(long)]
        price: f64,

        /// Accepted payment method, repeatable
        #[arg(long = "payment")]
        payment_methods: Vec<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    Update {
        id: String,

        #[arg(long)]
        origin: Option<String>,

        #[arg(long)]
        destination: Option<String>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        notes: Option<String>,
    },

    Cancel { id: String },

    Start { id: String },

    Complete { id: String },

    Delete { id: String },
}

#[derive(Subcommand)]
pub enum ReservationCommand {
    /// Your bookings as a passenger
    Mine,

    /// Bookings on one of your trips
    Trip { trip_id: String },

    Book {
        trip_id: String,

        #[arg(long)]
        seats: Option<u8>,

        #[arg(long)]
        meeting_point: Option<String>,

        #[arg(short, long)]
        message: Option<String>,
    },

    Confirm {
        id: String,

        #[arg(short, long)]
        message: Option<String>,
    },

    Reject {
        id: String,

        #[arg(short, long)]
        message: Option<String>,
    },

    Cancel { id: String },

    Complete { id: String },

    Delete { id: String },
}
