// ============================================================================
// ROUTING - Parsing ad-hoc del hash de la URL
// ============================================================================
// Rutas de la tienda: `#/...`, páginas de cuenta bajo `#/user/...`.
// Hash desconocido → best sellers (ruta por defecto).
// ============================================================================

/// Ruta de la aplicación (una página por hash)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    BestSellers,
    Blog,
    Stores,
    Quiz,
    Gifting,
    Press,
    Sustainability,
    Account,
    Orders,
    Cards,
    Wishlist,
}

impl Route {
    /// Parsear un hash de location (`#/blog`, `/blog`, `#/user/orders`...)
    pub fn from_hash(hash: &str) -> Route {
        let path = hash.trim_start_matches('#').trim_end_matches('/');
        match path {
            "" | "/" | "/best-sellers" => Route::BestSellers,
            "/blog" => Route::Blog,
            "/stores" => Route::Stores,
            "/quiz" => Route::Quiz,
            "/gifting" => Route::Gifting,
            "/press" => Route::Press,
            "/sustainability" => Route::Sustainability,
            "/user/account" => Route::Account,
            "/user/orders" => Route::Orders,
            "/user/cards" => Route::Cards,
            "/user/wishlist" => Route::Wishlist,
            _ => Route::BestSellers,
        }
    }

    /// Hash canónico de la ruta (para links y navegación)
    pub fn hash(&self) -> &'static str {
        match self {
            Route::BestSellers => "#/best-sellers",
            Route::Blog => "#/blog",
            Route::Stores => "#/stores",
            Route::Quiz => "#/quiz",
            Route::Gifting => "#/gifting",
            Route::Press => "#/press",
            Route::Sustainability => "#/sustainability",
            Route::Account => "#/user/account",
            Route::Orders => "#/user/orders",
            Route::Cards => "#/user/cards",
            Route::Wishlist => "#/user/wishlist",
        }
    }

    /// Título visible de la página
    pub fn title(&self) -> &'static str {
        match self {
            Route::BestSellers => "Best Sellers",
            Route::Blog => "Journal",
            Route::Stores => "Find a Store",
            Route::Quiz => "Skin Quiz",
            Route::Gifting => "Gifting",
            Route::Press => "Press",
            Route::Sustainability => "Sustainability",
            Route::Account => "My Account",
            Route::Orders => "My Orders",
            Route::Cards => "Saved Cards",
            Route::Wishlist => "Wishlist",
        }
    }

    /// Páginas que requieren autenticación (token bearer)
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Account | Route::Orders | Route::Cards | Route::Wishlist)
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::BestSellers
    }
}

/// Leer la ruta actual desde window.location.hash
pub fn current_route() -> Route {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    Route::from_hash(&hash)
}

/// Navegar asignando location.hash (dispara el listener global de hashchange)
pub fn navigate_to(route: Route) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(route.hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Route; 11] = [
        Route::BestSellers,
        Route::Blog,
        Route::Stores,
        Route::Quiz,
        Route::Gifting,
        Route::Press,
        Route::Sustainability,
        Route::Account,
        Route::Orders,
        Route::Cards,
        Route::Wishlist,
    ];

    #[test]
    fn every_route_round_trips_through_its_hash() {
        for route in ALL {
            assert_eq!(Route::from_hash(route.hash()), route);
        }
    }

    #[test]
    fn unknown_hash_falls_back_to_best_sellers() {
        assert_eq!(Route::from_hash("#/checkout"), Route::BestSellers);
        assert_eq!(Route::from_hash("#/user/unknown"), Route::BestSellers);
        assert_eq!(Route::from_hash("garbage"), Route::BestSellers);
    }

    #[test]
    fn empty_and_root_hash_are_the_default_route() {
        assert_eq!(Route::from_hash(""), Route::BestSellers);
        assert_eq!(Route::from_hash("#"), Route::BestSellers);
        assert_eq!(Route::from_hash("#/"), Route::BestSellers);
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Route::from_hash("#/blog/"), Route::Blog);
        assert_eq!(Route::from_hash("#/user/orders/"), Route::Orders);
    }

    #[test]
    fn account_pages_require_auth() {
        assert!(Route::Account.requires_auth());
        assert!(Route::Wishlist.requires_auth());
        assert!(!Route::BestSellers.requires_auth());
        assert!(!Route::Blog.requires_auth());
    }
}
