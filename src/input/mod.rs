pub mod bindings;
pub mod event;
pub mod normalizer;

pub use bindings::{InputBindings, KeyBinding};
pub use event::{ControlEvent, InputAxis, InputButton};
pub use normalizer::ControlNormalizer;
