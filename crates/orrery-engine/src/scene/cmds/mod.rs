mod clear;
mod stroke;

pub use clear::ClearCmd;
pub use stroke::StrokeCmd;
