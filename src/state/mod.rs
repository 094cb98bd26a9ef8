mod manager;
mod persistence;

pub use manager::{UserData, UserState};
pub use persistence::{export_week_csv, load_user_data, save_user_data};
