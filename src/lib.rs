#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod path_store;
pub mod recorder;
pub mod renderer;
pub mod session;
pub mod state;
pub mod stroke;
pub mod surface;

pub use app::StrokeCanvasApp;
pub use command::{Command, CommandOutput};
pub use config::CanvasConfig;
pub use error::{CanvasError, CanvasResult};
pub use geometry::HitTester;
pub use input::{InputEvent, InputHandler};
pub use path_store::PathStore;
pub use recorder::{GestureState, StrokeRecorder};
pub use renderer::Renderer;
pub use session::DrawingSession;
pub use state::{DrawingState, Mode};
pub use stroke::{Primitive, Segment, StoredStroke, StrokePath};
pub use surface::Surface;
