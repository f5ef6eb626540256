mod event;
pub use event::Event;

mod telescope;
pub use telescope::Telescope;
