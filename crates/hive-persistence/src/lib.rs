pub mod offline;
pub mod remote_state;
pub mod store;
pub mod traits;

pub use offline::*;
pub use remote_state::RemoteState;
pub use store::*;
pub use traits::*;
