use metfor::Meters;
use optional::Optioned;

/// Station information including location data and identification number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StationInfo {
    /// Network station number, eg CIMIS station 6 for Davis.
    num: Optioned<i32>,
    /// Human readable station or grid cell name.
    name: Option<String>,
    /// Latitude and longitude.
    location: Option<(f64, f64)>,
    /// Elevation, for gridded products this is the cell elevation and not a real station.
    elevation: Optioned<Meters>,
}

impl StationInfo {
    /// Create a new `StationInfo` object.
    ///
    /// # Arguments
    /// station_num: The network station identifier, or None.
    ///
    /// location: The latitude and longitude as a tuple, or None.
    ///
    /// elevation: The elevation of the station **in meters**.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::{Meters, Feet};
    /// use agclimate_analysis::StationInfo;
    /// use optional::{some, none};
    ///
    /// let _stn = StationInfo::new_with_values(6, (38.54,-121.78), Meters(18.0));
    /// let _stn = StationInfo::new_with_values(6, (38.54,-121.78), Feet(60.0));
    /// let _stn = StationInfo::new_with_values(Some(6), None, some(Meters(18.0)));
    ///
    /// // Note that lat-lon is an `Option` and not an `Optioned`
    /// let _stn = StationInfo::new_with_values(some(6), None, none::<Feet>());
    /// ```
    #[inline]
    pub fn new_with_values<T, U, V, W>(station_num: T, location: U, elevation: V) -> Self
    where
        T: Into<Optioned<i32>>,
        U: Into<Option<(f64, f64)>>,
        Optioned<W>: From<V>,
        W: optional::Noned + metfor::Length,
        Meters: From<W>,
    {
        let elev: Optioned<W> = Optioned::from(elevation);
        let elev: Optioned<Meters> = elev.map_t(Meters::from);

        StationInfo {
            num: station_num.into(),
            name: None,
            location: location.into(),
            elevation: elev,
        }
    }

    /// Create a new object with default values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use agclimate_analysis::StationInfo;
    ///
    /// assert!(StationInfo::new().station_num().is_none());
    /// assert!(StationInfo::new().name().is_none());
    /// assert!(StationInfo::new().location().is_none());
    /// assert!(StationInfo::new().elevation().is_none());
    ///
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a station number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use agclimate_analysis::StationInfo;
    ///
    /// assert_eq!(StationInfo::new().with_station(6).station_num().unwrap(), 6);
    /// assert_eq!(StationInfo::new().with_station(Some(6)).station_num().unwrap(), 6);
    ///
    /// ```
    #[inline]
    pub fn with_station<T>(mut self, number: T) -> Self
    where
        Optioned<i32>: From<T>,
    {
        self.num = Optioned::from(number);

        self
    }

    /// Builder method to add a station name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use agclimate_analysis::StationInfo;
    ///
    /// let stn = StationInfo::new().with_name("Davis".to_owned());
    /// assert_eq!(stn.name(), Some("Davis"));
    ///
    /// let stn = stn.with_name(None);
    /// assert!(stn.name().is_none());
    /// ```
    #[inline]
    pub fn with_name<S>(mut self, name: S) -> Self
    where
        Option<String>: From<S>,
    {
        self.name = Option::from(name);
        self
    }

    /// Builder method to add a location.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use agclimate_analysis::StationInfo;
    ///
    /// assert_eq!(
    ///     StationInfo::new().with_lat_lon((38.54, -121.78)).location().unwrap(), (38.54, -121.78));
    /// ```
    #[inline]
    pub fn with_lat_lon<T>(mut self, coords: T) -> Self
    where
        Option<(f64, f64)>: From<T>,
    {
        self.location = Option::from(coords);
        self
    }

    /// Builder method to add elevation.
    #[inline]
    pub fn with_elevation<T, U>(mut self, elev: T) -> Self
    where
        Optioned<U>: From<T>,
        U: optional::Noned + metfor::Length,
        Meters: From<U>,
    {
        let elevation: Optioned<U> = Optioned::from(elev);
        let elevation: Optioned<Meters> = elevation.map_t(Meters::from);

        self.elevation = elevation;
        self
    }

    /// Network station number.
    #[inline]
    pub fn station_num(&self) -> Optioned<i32> {
        self.num
    }

    /// Station name.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Latitude and longitude.
    #[inline]
    pub fn location(&self) -> Option<(f64, f64)> {
        self.location
    }

    /// Elevation in meters.
    #[inline]
    pub fn elevation(&self) -> Optioned<Meters> {
        self.elevation
    }
}
