//! Route planning: inputs → places → raw route → compiled route.

use log::{info, warn};

use nav_core::{Coordinate, Endpoint, NavConfig, NavError, NavResult, Place};
use nav_geocode::{Geocoder, PostalDirectory, Resolver};
use nav_route::{CompiledRoute, Compiler, Router};
use nav_session::SessionRegistry;

use crate::SearchHistory;

/// Fluent builder for [`Navigator<D, G, R>`].
///
/// # Required inputs
///
/// - `D: PostalDirectory`, `G: Geocoder`: the geocoding providers
/// - `R: Router`: the routing service client
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                     |
/// |--------------------|-----------------------------|
/// | `.config(c)`       | `NavConfig::default()`      |
/// | `.history(h)`      | Empty, capacity 10          |
///
/// # Example
///
/// ```rust,ignore
/// let mut nav = NavigatorBuilder::new(directory, geocoder, router)
///     .config(config)
///     .build()?;
/// let route = nav.plan_route("01310-100", "COORD:-23.5614,-46.6559")?;
/// ```
pub struct NavigatorBuilder<D: PostalDirectory, G: Geocoder, R: Router> {
    directory: D,
    geocoder:  G,
    router:    R,
    config:    Option<NavConfig>,
    history:   Option<SearchHistory>,
}

impl<D: PostalDirectory, G: Geocoder, R: Router> NavigatorBuilder<D, G, R> {
    pub fn new(directory: D, geocoder: G, router: R) -> Self {
        Self { directory, geocoder, router, config: None, history: None }
    }

    pub fn config(mut self, config: NavConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Start from an existing history (e.g. restored by the host).
    pub fn history(mut self, history: SearchHistory) -> Self {
        self.history = Some(history);
        self
    }

    /// Validate the configuration and return a ready [`Navigator`].
    ///
    /// # Errors
    ///
    /// [`NavError::InvalidInput`] for a zero search limit or an empty alert
    /// band.
    pub fn build(self) -> NavResult<Navigator<D, G, R>> {
        let config = self.config.unwrap_or_default();

        if config.geocode.search_limit == 0 {
            return Err(NavError::InvalidInput("config: geocode.search_limit must be positive".into()));
        }
        if config.session.alert_min_m >= config.session.alert_max_m {
            return Err(NavError::InvalidInput(format!(
                "config: alert band {}..{} m is empty",
                config.session.alert_min_m, config.session.alert_max_m,
            )));
        }

        Ok(Navigator {
            resolver: Resolver::new(self.directory, self.geocoder, config.geocode.clone()),
            router:   self.router,
            compiler: Compiler::new(config.compile.clone(), config.locale),
            history:  self.history.unwrap_or_default(),
            config,
        })
    }
}

/// Resolves user input and plans routes.
///
/// One navigator serves any number of sessions: it produces
/// [`CompiledRoute`]s, and the host installs each in the requesting user's
/// session.
pub struct Navigator<D: PostalDirectory, G: Geocoder, R: Router> {
    resolver: Resolver<D, G>,
    router:   R,
    compiler: Compiler,
    history:  SearchHistory,
    config:   NavConfig,
}

impl<D: PostalDirectory, G: Geocoder, R: Router> Navigator<D, G, R> {
    /// Resolve a postal code or `COORD:` token.  Valid places are added to
    /// the history.
    pub fn lookup(&mut self, input: &str) -> Place {
        let place = self.resolver.resolve_input(input);
        self.history.record(&place);
        place
    }

    /// Resolve a street address through the postal directory.  Valid places
    /// are added to the history.
    pub fn lookup_address(&mut self, region: &str, city: &str, street: &str) -> Place {
        let place = self.resolver.resolve_by_address(region, city, street);
        self.history.record(&place);
        place
    }

    /// Free-text search; see [`Resolver::resolve_free_text`].
    pub fn search(&self, query: &str) -> Vec<Place> {
        self.resolver.resolve_free_text(query)
    }

    /// Resolve both endpoints, route between them and compile the result.
    ///
    /// Both endpoints are added to the history on success.
    ///
    /// # Errors
    ///
    /// - [`NavError::NotFound`] (`"origin not found: <input>"` or
    ///   `"destination not found: <input>"`) when an input does not resolve.
    /// - [`NavError::MissingCoordinates`] when a resolved place cannot be
    ///   geocoded.
    /// - Router and compiler errors unchanged.
    pub fn plan_route(&mut self, origin_input: &str, destination_input: &str) -> NavResult<CompiledRoute> {
        let (origin, from) = self.resolve_endpoint(origin_input, Endpoint::Origin)?;
        let (destination, to) = self.resolve_endpoint(destination_input, Endpoint::Destination)?;

        let raw = self.router.route(from, to).inspect_err(|e| {
            warn!("router failed {from} → {to}: {e}");
        })?;
        let route = self.compiler.compile(origin, destination, &raw)?;

        self.history.record(&route.origin);
        self.history.record(&route.destination);
        info!(
            "planned {} → {}: {} instructions, {:.0} m",
            origin_input,
            destination_input,
            route.len(),
            route.total_distance_m,
        );
        Ok(route)
    }

    /// A session registry using this navigator's session thresholds and
    /// locale.
    pub fn new_registry(&self) -> SessionRegistry {
        SessionRegistry::new(self.config.session.clone(), self.config.locale)
    }

    #[inline]
    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    #[inline]
    pub fn resolver(&self) -> &Resolver<D, G> {
        &self.resolver
    }

    #[inline]
    pub fn router(&self) -> &R {
        &self.router
    }

    #[inline]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    fn resolve_endpoint(&self, input: &str, endpoint: Endpoint) -> NavResult<(Place, Coordinate)> {
        let mut place = self.resolver.resolve_input(input);
        if !place.valid {
            info!("{endpoint} {input:?} rejected: {}", place.error_message.as_deref().unwrap_or("invalid"));
            return Err(NavError::NotFound(format!("{endpoint} not found: {input}")));
        }
        self.resolver.fill_coordinate(&mut place);
        let coordinate = place.coordinate.ok_or(NavError::MissingCoordinates(endpoint))?;
        Ok((place, coordinate))
    }
}
