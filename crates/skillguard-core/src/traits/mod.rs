mod mitigation;

pub use mitigation::IMitigation;
