mod format;

pub use format::{
    class_names, contractor_image_path, distance_miles, format_distance, format_phone_number,
    format_stars, star_classes, GeoPoint, StarClasses, DEFAULT_CONTRACTOR_IMAGE,
};
