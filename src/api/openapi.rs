//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, rentals, tools, users, wishlist};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ToolLink API",
        version = "0.1.0",
        description = "Peer-to-Peer Tool Rental Marketplace REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Users
        users::register,
        users::login,
        users::update_user,
        // Tools
        tools::add_tool,
        tools::get_tools,
        tools::get_my_listings,
        tools::update_tool,
        tools::delete_tool,
        // Rentals
        rentals::rent_tool,
        rentals::return_tool,
        rentals::my_rentals,
        rentals::get_lender_stats,
        // Wishlist
        wishlist::add_to_wishlist,
        wishlist::remove_from_wishlist,
        wishlist::get_wishlist_ids,
        wishlist::my_wishlist,
    ),
    components(
        schemas(
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::Credentials,
            crate::models::user::UpdateUser,
            // Tools
            crate::models::tool::ToolStatus,
            crate::models::tool::ToolWithOwner,
            crate::models::tool::OwnerListing,
            crate::models::tool::CreateTool,
            crate::models::tool::UpdateTool,
            // Rentals
            crate::models::rental::RentalStatus,
            crate::models::rental::RentalDetails,
            crate::models::rental::LenderStats,
            rentals::RentToolRequest,
            rentals::RentResponse,
            rentals::ReturnToolRequest,
            // Wishlist
            crate::models::wishlist::WishlistEntry,
            crate::models::wishlist::WishlistToolId,
            wishlist::WishlistAddResponse,
            // Shared
            crate::api::ExecResult,
            crate::api::MessageResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "Account registration and profiles"),
        (name = "tools", description = "Tool listing management"),
        (name = "rentals", description = "Rental lifecycle and lender stats"),
        (name = "wishlist", description = "Saved-for-later tool references")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
