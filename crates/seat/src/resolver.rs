//! Combine per-sample votes, detected sun events, and passenger preferences
//! into a single seat recommendation.

use chrono::{DateTime, Utc};
use log::{debug, trace as trace_log};
use serde::Serialize;
use sunside_core::GeoPoint;
use sunside_ephem::{local_solar_date, sun_times_utc};

use crate::request::{FlightRequest, SeatError, SunEventKind, SunPreference};
use crate::sampler::{PathSample, samples};
use crate::settings::EngineSettings;
use crate::vote::{Side, SideVote, cast_vote};

/// A sunrise or sunset seen from the aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SunEvent {
    pub time_utc: DateTime<Utc>,
    pub location: GeoPoint,
    pub kind: SunEventKind,
}

/// What the final side was decided on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DecisionBasis {
    Majority,
    Sunrise,
    Sunset,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatRecommendation {
    pub side: Side,
    pub reason: String,
    pub basis: DecisionBasis,
    pub left_votes: usize,
    pub right_votes: usize,
    pub sunrise: Option<SunEvent>,
    pub sunset: Option<SunEvent>,
}

/// One path sample together with the vote it cast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleTrace {
    #[serde(flatten)]
    pub sample: PathSample,
    #[serde(flatten)]
    pub vote: SideVote,
}

/// Recommend a side with the default engine settings.
pub fn recommend(request: &FlightRequest) -> Result<SeatRecommendation, SeatError> {
    recommend_with(request, &EngineSettings::default())
}

/// Recommend a side for `request`.
///
/// Every sample votes LEFT or RIGHT. Independently, the last sample inside a
/// padded sunrise (sunset) window becomes the flight's sunrise (sunset).
/// A wanted event that was found overrides the majority with its own vote.
pub fn recommend_with(
    request: &FlightRequest,
    settings: &EngineSettings,
) -> Result<SeatRecommendation, SeatError> {
    let path = samples(request, settings.step_minutes)?;
    debug!(
        "sampling {} positions over {:.0} km",
        path.len(),
        path.path_length_km()
    );

    let mut left_votes = 0usize;
    let mut right_votes = 0usize;
    let mut sunrise: Option<SunEvent> = None;
    let mut sunset: Option<SunEvent> = None;

    for sample in path {
        let vote = cast_vote(
            &sample.coordinate,
            &sample.time_utc,
            &request.destination,
            settings.obliquity,
        );
        trace_log!(
            "t+{}m at {}: sun {:.1} vs track {:.1} -> {}",
            sample.elapsed_minutes,
            sample.coordinate,
            vote.bearing_to_sun,
            vote.bearing_to_destination,
            vote.side
        );
        match vote.side {
            Side::Left => left_votes += 1,
            Side::Right => right_votes += 1,
        }

        let times = sun_times_utc(
            local_solar_date(&sample.time_utc, &sample.coordinate),
            &sample.coordinate,
        );
        if times
            .sunrise_window()
            .is_some_and(|window| window.contains(&sample.time_utc, settings.event_padding))
        {
            sunrise = Some(event_at(&sample, SunEventKind::Sunrise));
        }
        if times
            .sunset_window()
            .is_some_and(|window| window.contains(&sample.time_utc, settings.event_padding))
        {
            sunset = Some(event_at(&sample, SunEventKind::Sunset));
        }
    }

    if let Some(event) = &sunrise {
        debug!("sunrise seen at {} over {}", event.time_utc, event.location);
    }
    if let Some(event) = &sunset {
        debug!("sunset seen at {} over {}", event.time_utc, event.location);
    }

    let chosen = preferred_event(
        &request.sun_preference,
        sunrise.as_ref(),
        sunset.as_ref(),
    );
    let (side, basis) = match chosen {
        Some(event) => {
            let vote = cast_vote(
                &event.location,
                &event.time_utc,
                &request.destination,
                settings.obliquity,
            );
            let basis = match event.kind {
                SunEventKind::Sunrise => DecisionBasis::Sunrise,
                SunEventKind::Sunset => DecisionBasis::Sunset,
            };
            (vote.side, basis)
        }
        None if left_votes > right_votes => (Side::Left, DecisionBasis::Majority),
        None => (Side::Right, DecisionBasis::Majority),
    };
    debug!("decided {side} by {basis:?} (left {left_votes}, right {right_votes})");

    Ok(SeatRecommendation {
        side,
        reason: reason_for(side, chosen, left_votes, right_votes),
        basis,
        left_votes,
        right_votes,
        sunrise,
        sunset,
    })
}

/// Per-sample votes for the whole flight, for callers rendering the sun live.
pub fn trace(
    request: &FlightRequest,
    settings: &EngineSettings,
) -> Result<Vec<SampleTrace>, SeatError> {
    let path = samples(request, settings.step_minutes)?;
    Ok(path
        .map(|sample| SampleTrace {
            vote: cast_vote(
                &sample.coordinate,
                &sample.time_utc,
                &request.destination,
                settings.obliquity,
            ),
            sample,
        })
        .collect())
}

/// Event whose vote should override the majority, if any.
///
/// An event is usable when the passenger wants it and the flight sees it.
/// With both usable, an unset priority means sunset.
fn preferred_event<'a>(
    preference: &SunPreference,
    sunrise: Option<&'a SunEvent>,
    sunset: Option<&'a SunEvent>,
) -> Option<&'a SunEvent> {
    let sunrise = sunrise.filter(|_| preference.wants_sunrise);
    let sunset = sunset.filter(|_| preference.wants_sunset);
    match (sunrise, sunset) {
        (Some(rise), Some(set)) => match preference.priority.unwrap_or(SunEventKind::Sunset) {
            SunEventKind::Sunrise => Some(rise),
            SunEventKind::Sunset => Some(set),
        },
        (rise, set) => rise.or(set),
    }
}

fn event_at(sample: &PathSample, kind: SunEventKind) -> SunEvent {
    SunEvent {
        time_utc: sample.time_utc,
        location: sample.coordinate,
        kind,
    }
}

fn reason_for(
    side: Side,
    event: Option<&SunEvent>,
    left_votes: usize,
    right_votes: usize,
) -> String {
    let side_name = side.as_str().to_lowercase();
    match event {
        Some(event) => format!(
            "Sit on the {side_name} side to watch the {} around {} UTC.",
            event.kind.as_str(),
            event.time_utc.format("%H:%M")
        ),
        None => {
            let on_side = match side {
                Side::Left => left_votes,
                Side::Right => right_votes,
            };
            format!(
                "The sun is mostly on the {side_name} side during your journey ({on_side} of {} samples).",
                left_votes + right_votes
            )
        }
    }
}
