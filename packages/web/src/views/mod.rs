mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod app_layout;
pub use app_layout::AppLayout;

mod dashboard;
pub use dashboard::Dashboard;

mod pokemon;
pub use pokemon::PokemonPage;

mod inventory;
pub use inventory::Inventory;

mod statistics;
pub use statistics::Statistics;

mod not_found;
pub use not_found::NotFound;
