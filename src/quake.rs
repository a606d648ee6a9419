use serde::Serialize;

/// A single earthquake observation.
///
/// Values are stored exactly as given; nothing is validated.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Quake {
    magnitude: f64,
    location: String,
    time: i64,
}

impl Quake {
    /// `time` is in milliseconds since the Unix epoch.
    pub fn new<S: Into<String>>(magnitude: f64, location: S, time: i64) -> Self {
        Self {
            magnitude,
            location: location.into(),
            time,
        }
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    #[inline]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[inline]
    pub fn time(&self) -> i64 {
        self.time
    }
}

#[test]
fn test_quake_fields() {
    let quake = Quake::new(7.2, "88km N of Yelizovo, Russia", 1454124312220);
    assert_eq!(quake.magnitude(), 7.2);
    assert_eq!(quake.location(), "88km N of Yelizovo, Russia");
    assert_eq!(quake.time(), 1454124312220);
}

#[test]
fn test_quake_fields_unvalidated() {
    let quake = Quake::new(-3.5, String::new(), i64::MIN);
    assert_eq!(quake.magnitude(), -3.5);
    assert_eq!(quake.location(), "");
    assert_eq!(quake.time(), i64::MIN);
}
