pub use super::bottle::Entity as Bottle;
pub use super::bottle_reservation::Entity as BottleReservation;
pub use super::city::Entity as City;
pub use super::club::Entity as Club;
pub use super::dj::Entity as Dj;
pub use super::event::Entity as Event;
pub use super::order::Entity as Order;
pub use super::order_line::Entity as OrderLine;
pub use super::reservation_detail::Entity as ReservationDetail;
pub use super::reward::Entity as Reward;
pub use super::reward_redemption::Entity as RewardRedemption;
pub use super::ticket::Entity as Ticket;
pub use super::time_slot::Entity as TimeSlot;
pub use super::user::Entity as User;
pub use super::user_club::Entity as UserClub;
pub use super::vip_zone::Entity as VipZone;
