/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public task store crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod clock;
pub mod error;
pub mod observer;
pub mod sort;
pub mod store;
pub mod task;

pub use clock::{Clock, IdGenerator, ManualClock, SystemClock};
pub use error::{Result, TaskError};
pub use observer::{StoreEvent, SubscriptionId};
pub use sort::{SortKey, sorted_view};
pub use store::{EditSession, TaskStore};
pub use task::{Priority, Task, TaskId};
