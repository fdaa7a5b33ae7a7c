pub mod density;
pub mod error;
pub mod kinematics;
pub mod parameters;
pub mod point;
pub mod sampler;
pub mod settings;

pub use density::breit_wigner;
pub use error::DalitzError;
pub use kinematics::{boundary_curves, contains, energy2, energy3, m23_lower, m23_upper};
pub use parameters::{Bounds, PhysicalParameters};
pub use point::Point;
pub use sampler::{SampleRun, Sampler};
pub use settings::{Proposal, Settings};
