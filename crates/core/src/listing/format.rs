//! Pure formatting helpers used by the contractor listing pages.

use serde::Serialize;

/// Radius of the Earth in miles.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Image shown for every contractor card.
pub const DEFAULT_CONTRACTOR_IMAGE: &str = "/images/contractors/default-fence.svg";

/// Joins the present, non-empty class names with a single space.
///
/// # Example
///
/// ```
/// use fencesite_core::listing::class_names;
///
/// let classes = class_names([Some("btn"), None, Some(""), Some("btn-primary")]);
/// assert_eq!(classes, "btn btn-primary");
/// ```
pub fn class_names<'a, I>(inputs: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    inputs
        .into_iter()
        .flatten()
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a US phone number as `(AAA) BBB-CCCC`.
///
/// Every non-digit is stripped first. Input that does not reduce to exactly
/// ten digits is returned unchanged.
///
/// # Example
///
/// ```
/// use fencesite_core::listing::format_phone_number;
///
/// assert_eq!(format_phone_number("555.123.4567"), "(555) 123-4567");
/// assert_eq!(format_phone_number("+44 20 7946 0958"), "+44 20 7946 0958");
/// ```
pub fn format_phone_number(phone: &str) -> String {
    if phone.is_empty() {
        return String::new();
    }

    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        phone.to_string()
    }
}

/// Formats a star rating, keeping one decimal only for fractional ratings.
pub fn format_stars(stars: Option<f64>) -> String {
    match stars {
        None => "N/A".to_string(),
        Some(stars) if stars.fract() == 0.0 => format!("{stars}"),
        Some(stars) => format!("{stars:.1}"),
    }
}

/// How a rating is drawn as a row of star icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarClasses {
    pub full_stars: u32,
    pub has_half_star: bool,
}

/// Splits a rating into full stars and an optional half star.
pub fn star_classes(rating: f64) -> StarClasses {
    let floor = rating.floor();
    let full_stars = if floor.is_finite() && floor > 0.0 {
        floor as u32
    } else {
        0
    };

    StarClasses {
        full_stars,
        has_half_star: rating - floor >= 0.5,
    }
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Builds a point, treating a zero or non-finite coordinate as missing.
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        let usable = |value: f64| value.is_finite() && value != 0.0;
        (usable(lat) && usable(lon)).then_some(Self { lat, lon })
    }
}

/// Great-circle distance between two points, in miles (haversine).
pub fn distance_miles(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Distance in miles with one decimal, or `None` when either point is missing.
///
/// # Example
///
/// ```
/// use fencesite_core::listing::{format_distance, GeoPoint};
///
/// let a = GeoPoint::new(10.0, 20.0);
/// let b = GeoPoint::new(11.0, 20.0);
/// assert_eq!(format_distance(a, b).as_deref(), Some("69.1"));
/// assert_eq!(format_distance(a, GeoPoint::new(0.0, 20.0)), None);
/// ```
pub fn format_distance(from: Option<GeoPoint>, to: Option<GeoPoint>) -> Option<String> {
    Some(format!("{:.1}", distance_miles(from?, to?)))
}

/// Image path for a contractor card. Every contractor shares the same image.
pub fn contractor_image_path(_contractor_id: &str) -> &'static str {
    DEFAULT_CONTRACTOR_IMAGE
}
