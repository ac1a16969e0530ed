//! Built-in query modules of the console.

mod apps_by_name;
mod devices_by_user;
mod pos_inventory;

pub use apps_by_name::AppsByName;
pub use devices_by_user::DevicesByUser;
pub use pos_inventory::{PosInventory, POS_USER_PATTERN};
