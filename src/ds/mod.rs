pub mod intrusive_list;
pub mod order_track;
pub mod slot_arena;

pub use intrusive_list::IntrusiveList;
pub use order_track::OrderTrack;
pub use slot_arena::{SlotArena, SlotId};
