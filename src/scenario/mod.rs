pub mod params;

pub use params::{
    BetaParams, GaussianParams, ScenarioParams, TriangularParams, ValidationError,
};
