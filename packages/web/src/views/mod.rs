mod layout;
pub use layout::AppLayout;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod workouts;
pub use workouts::Workouts;
