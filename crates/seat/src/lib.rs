//! Window-seat recommendation: sample the flight path, vote on which side the
//! sun is on, look for sunrise/sunset along the way, and settle on a side.

pub mod directory;
pub mod request;
pub mod resolver;
pub mod sampler;
pub mod settings;
pub mod vote;

pub use directory::{Airport, AirportDirectory, CatalogDirectory, DirectoryError};
pub use request::{FlightRequest, SeatError, SunEventKind, SunPreference};
pub use resolver::{
    DecisionBasis, SampleTrace, SeatRecommendation, SunEvent, recommend, recommend_with, trace,
};
pub use sampler::{PathSample, PathSamples, samples};
pub use settings::{EngineSettings, SettingsError};
pub use vote::{Side, SideVote, cast_vote};
