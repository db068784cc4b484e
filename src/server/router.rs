//! Route table, OpenAPI document and CORS policy.
//!
//! Guard checkpoints live in the handlers themselves (`AuthGuard::require`),
//! so this table only wires paths to handlers. Routes keep the platform's
//! Spanish segments. CORS is one strict policy for the whole router: a single
//! configured origin with credentials and a small method/header allow-list.

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    routing::post,
    routing::put,
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model,
    server::{
        controller::{
            auth, bottle, city, club, dj, event, order, reservation, reward, stats, ticket,
            time_slot, user, vip_zone,
        },
        error::{config::ConfigError, AppError},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        city::get_cities,
        city::get_city_by_id,
        city::create_city,
        city::update_city,
        city::delete_city,
        club::get_clubs,
        club::get_club_by_id,
        club::get_clubs_by_city,
        club::create_club,
        club::update_club,
        club::delete_club,
        dj::get_djs,
        dj::get_dj_by_id,
        dj::create_dj,
        dj::update_dj,
        dj::delete_dj,
        event::get_events,
        event::get_event_by_id,
        event::get_events_by_club,
        event::get_active_events_by_club,
        event::create_event,
        event::update_event,
        event::delete_event,
        bottle::get_bottles,
        bottle::get_bottle_by_id,
        bottle::get_bottles_by_club,
        bottle::create_bottle,
        bottle::update_bottle,
        bottle::delete_bottle,
        vip_zone::get_vip_zones,
        vip_zone::get_vip_zone_by_id,
        vip_zone::get_vip_zones_by_club,
        vip_zone::create_vip_zone,
        vip_zone::update_vip_zone,
        vip_zone::delete_vip_zone,
        time_slot::get_time_slots,
        time_slot::get_time_slot_by_id,
        time_slot::get_time_slots_by_club,
        time_slot::create_time_slot,
        time_slot::update_time_slot,
        time_slot::delete_time_slot,
        ticket::get_tickets,
        ticket::get_ticket_by_id,
        ticket::get_tickets_by_user,
        ticket::get_tickets_by_event,
        ticket::create_ticket,
        ticket::update_ticket,
        ticket::delete_ticket,
        order::get_orders,
        order::get_order_by_id,
        order::get_orders_by_user,
        order::create_order,
        order::update_order,
        order::complete_order,
        order::delete_order,
        reservation::get_reservations,
        reservation::get_reservation_by_id,
        reservation::get_reservations_by_ticket,
        reservation::create_reservation,
        reservation::update_reservation,
        reservation::delete_reservation,
        reward::get_rewards,
        reward::get_reward_by_id,
        reward::redeem_reward,
        reward::create_reward,
        reward::update_reward,
        reward::delete_reward,
        user::get_users,
        user::get_user_by_id,
        user::get_profile,
        user::top_up_wallet,
        user::update_user,
        user::delete_user,
        stats::get_revenue,
        stats::get_attendance,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::api::MessageDto,
        model::auth::RegisterDto,
        model::auth::LoginDto,
        model::auth::LoginResponseDto,
        model::city::CityDto,
        model::city::CreateCityDto,
        model::club::ClubDto,
        model::club::CreateClubDto,
        model::dj::DjDto,
        model::dj::CreateDjDto,
        model::event::EventDto,
        model::event::CreateEventDto,
        model::bottle::BottleDto,
        model::bottle::CreateBottleDto,
        model::vip_zone::VipZoneDto,
        model::vip_zone::CreateVipZoneDto,
        model::time_slot::TimeSlotDto,
        model::time_slot::CreateTimeSlotDto,
        model::ticket::TicketDto,
        model::ticket::CreateTicketDto,
        model::order::OrderDto,
        model::order::OrderLineDto,
        model::order::CreateOrderDto,
        model::order::CreateOrderLineDto,
        model::reservation::BottleReservationDto,
        model::reservation::ReservationDetailDto,
        model::reservation::CreateBottleReservationDto,
        model::reservation::CreateReservationDetailDto,
        model::reward::RewardDto,
        model::reward::CreateRewardDto,
        model::reward::RedemptionDto,
        model::user::UserDto,
        model::user::UpdateUserDto,
        model::user::WalletTopUpDto,
        model::stats::EventRevenueDto,
        model::stats::EventAttendanceDto,
    ))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/ciudades", get(city::get_cities).post(city::create_city))
        .route(
            "/api/ciudades/{id}",
            get(city::get_city_by_id)
                .put(city::update_city)
                .delete(city::delete_city),
        )
        .route("/api/discotecas", get(club::get_clubs).post(club::create_club))
        .route(
            "/api/discotecas/{id}",
            get(club::get_club_by_id)
                .put(club::update_club)
                .delete(club::delete_club),
        )
        .route("/api/discotecas/ciudad/{ciudad_id}", get(club::get_clubs_by_city))
        .route("/api/djs", get(dj::get_djs).post(dj::create_dj))
        .route(
            "/api/djs/{id}",
            get(dj::get_dj_by_id).put(dj::update_dj).delete(dj::delete_dj),
        )
        .route("/api/eventos", get(event::get_events).post(event::create_event))
        .route(
            "/api/eventos/{id}",
            get(event::get_event_by_id)
                .put(event::update_event)
                .delete(event::delete_event),
        )
        .route(
            "/api/eventos/discoteca/{discoteca_id}",
            get(event::get_events_by_club),
        )
        .route(
            "/api/eventos/discoteca/{discoteca_id}/activos",
            get(event::get_active_events_by_club),
        )
        .route("/api/botellas", get(bottle::get_bottles).post(bottle::create_bottle))
        .route(
            "/api/botellas/{id}",
            get(bottle::get_bottle_by_id)
                .put(bottle::update_bottle)
                .delete(bottle::delete_bottle),
        )
        .route(
            "/api/botellas/discoteca/{discoteca_id}",
            get(bottle::get_bottles_by_club),
        )
        .route(
            "/api/zonas-vip",
            get(vip_zone::get_vip_zones).post(vip_zone::create_vip_zone),
        )
        .route(
            "/api/zonas-vip/{id}",
            get(vip_zone::get_vip_zone_by_id)
                .put(vip_zone::update_vip_zone)
                .delete(vip_zone::delete_vip_zone),
        )
        .route(
            "/api/zonas-vip/discoteca/{discoteca_id}",
            get(vip_zone::get_vip_zones_by_club),
        )
        .route(
            "/api/tramos-horarios",
            get(time_slot::get_time_slots).post(time_slot::create_time_slot),
        )
        .route(
            "/api/tramos-horarios/{id}",
            get(time_slot::get_time_slot_by_id)
                .put(time_slot::update_time_slot)
                .delete(time_slot::delete_time_slot),
        )
        .route(
            "/api/tramos-horarios/discoteca/{discoteca_id}",
            get(time_slot::get_time_slots_by_club),
        )
        .route("/api/entradas", get(ticket::get_tickets).post(ticket::create_ticket))
        .route(
            "/api/entradas/{id}",
            get(ticket::get_ticket_by_id)
                .put(ticket::update_ticket)
                .delete(ticket::delete_ticket),
        )
        .route(
            "/api/entradas/usuario/{usuario_id}",
            get(ticket::get_tickets_by_user),
        )
        .route(
            "/api/entradas/evento/{evento_id}",
            get(ticket::get_tickets_by_event),
        )
        .route("/api/pedidos", get(order::get_orders).post(order::create_order))
        .route(
            "/api/pedidos/{id}",
            get(order::get_order_by_id)
                .put(order::update_order)
                .delete(order::delete_order),
        )
        .route(
            "/api/pedidos/usuario/{usuario_id}",
            get(order::get_orders_by_user),
        )
        .route("/api/pedidos/{id}/completar", put(order::complete_order))
        .route(
            "/api/reservas-botella",
            get(reservation::get_reservations).post(reservation::create_reservation),
        )
        .route(
            "/api/reservas-botella/{id}",
            get(reservation::get_reservation_by_id)
                .put(reservation::update_reservation)
                .delete(reservation::delete_reservation),
        )
        .route(
            "/api/reservas-botella/entrada/{entrada_id}",
            get(reservation::get_reservations_by_ticket),
        )
        .route(
            "/api/recompensas",
            get(reward::get_rewards).post(reward::create_reward),
        )
        .route(
            "/api/recompensas/{id}",
            get(reward::get_reward_by_id)
                .put(reward::update_reward)
                .delete(reward::delete_reward),
        )
        .route("/api/recompensas/{id}/canjear", post(reward::redeem_reward))
        .route("/api/usuarios", get(user::get_users))
        .route("/api/usuarios/perfil", get(user::get_profile))
        .route("/api/usuarios/monedero", post(user::top_up_wallet))
        .route(
            "/api/usuarios/{id}",
            get(user::get_user_by_id)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/api/admin/estadisticas/ingresos/{discoteca_id}",
            get(stats::get_revenue),
        )
        .route(
            "/api/admin-discoteca/estadisticas/asistencia/{discoteca_id}",
            get(stats::get_attendance),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Builds the CORS layer for the single configured origin.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, AppError> {
    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar("APP_ORIGIN".to_string()))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true))
}
