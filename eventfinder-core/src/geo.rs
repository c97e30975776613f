//! Great-circle distances and the nearby-events ranking.

use std::cmp::Ordering;
use std::fmt;

use crate::event::Event;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Coordinates { lat, lng }
    }

    /// Great-circle distance in kilometres.
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        haversine_km(*self, *other)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Where "nearby" is measured from.
#[derive(Debug, Clone, PartialEq)]
pub struct Origin {
    pub coordinates: Coordinates,
    pub label: String,
    /// True when the user's position was unknown and a default was used
    pub is_fallback: bool,
}

impl Origin {
    /// Use the user's position if known, otherwise the given default.
    pub fn resolve(user: Option<Coordinates>, fallback: Coordinates, fallback_label: &str) -> Self {
        match user {
            Some(coordinates) => Origin {
                coordinates,
                label: "Current location".to_string(),
                is_fallback: false,
            },
            None => {
                tracing::info!(label = fallback_label, %fallback, "location unavailable, using default origin");
                Origin {
                    coordinates: fallback,
                    label: fallback_label.to_string(),
                    is_fallback: true,
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyEvent<'a> {
    pub event: &'a Event,
    pub distance_km: f64,
}

/// Events within `radius_km` of `origin`, closest first.
///
/// Events without usable coordinates are skipped.
pub fn nearby_events(events: &[Event], origin: Coordinates, radius_km: f64) -> Vec<NearbyEvent<'_>> {
    let mut nearby: Vec<NearbyEvent> = events
        .iter()
        .filter_map(|event| {
            let Some(position) = event.coordinates() else {
                tracing::warn!(id = event.id, title = %event.title, "event has no usable coordinates, skipping");
                return None;
            };
            Some(NearbyEvent {
                event,
                distance_km: haversine_km(origin, position),
            })
        })
        .filter(|n| n.distance_km <= radius_km)
        .collect();

    nearby.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
    });
    nearby
}
