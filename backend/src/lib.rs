pub mod glutils;
pub mod logging;
pub mod math;
pub mod mesh;
pub mod report;
pub mod shaders;
pub mod system;
pub mod time;
