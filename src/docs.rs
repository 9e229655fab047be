use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{AuthResponse, LoginRequest, MeResponse, RegisterRequestDto};
use crate::modules::courses::model::{
    CategoriesResponse, Course, CourseDetailResponse, CourseListResponse, CourseStatus,
    CreateCourseDto, CreateCourseResponse, UpdateCourseDto,
};
use crate::modules::favorites::model::{
    AddFavoriteResponse, CheckFavoriteResponse, FavoriteCourse, FavoritesResponse,
};
use crate::modules::users::model::{
    MessageResponse, SetRoleDto, UpdateProfileDto, User, UserRole,
};
use crate::utils::pagination::PaginationParams;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::get_me,
        crate::modules::auth::controller::update_profile,
        crate::modules::courses::controller::list_courses,
        crate::modules::courses::controller::list_categories,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::favorites::controller::list_favorites,
        crate::modules::favorites::controller::add_favorite,
        crate::modules::favorites::controller::remove_favorite,
        crate::modules::favorites::controller::check_favorite,
        crate::modules::users::controller::set_user_role,
        crate::modules::users::controller::delete_user,
    ),
    components(
        schemas(
            User,
            UserRole,
            RegisterRequestDto,
            LoginRequest,
            AuthResponse,
            MeResponse,
            UpdateProfileDto,
            SetRoleDto,
            MessageResponse,
            ErrorResponse,
            Course,
            CourseStatus,
            CreateCourseDto,
            UpdateCourseDto,
            CourseListResponse,
            CourseDetailResponse,
            CategoriesResponse,
            CreateCourseResponse,
            FavoriteCourse,
            FavoritesResponse,
            AddFavoriteResponse,
            CheckFavoriteResponse,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login, and profile endpoints"),
        (name = "Courses", description = "Course catalog browsing and admin management"),
        (name = "Favorites", description = "Per-user course bookmarks"),
        (name = "Users", description = "Admin user management")
    ),
    info(
        title = "PREP HUB API",
        version = "0.1.0",
        description = "Course-catalog marketplace REST API built with Rust, Axum, and SQLite.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
