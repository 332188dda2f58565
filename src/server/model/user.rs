//! User domain models and parameters.
//!
//! Users authenticate with email and password and carry a role deciding access to
//! admin endpoints. The password hash stays on the domain model and is dropped when
//! converting to a DTO.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::Role;

use crate::model::user::{CreateUserDto, RoleDto, UpdateUserDto, UserDto};

/// Registered user account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// bcrypt hash. `None` for accounts that cannot log in with a password.
    pub password_hash: Option<String>,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub gender: Option<String>,
    pub role: Role,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses, without the
    /// password hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            birthday: self.birthday,
            gender: self.gender,
            role: self.role.into(),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password,
            phone: entity.phone,
            birthday: entity.birthday,
            gender: entity.gender,
            role: entity.role,
            is_deleted: entity.is_deleted,
            created_at: entity.created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => RoleDto::Admin,
            Role::User => RoleDto::User,
        }
    }
}

impl From<RoleDto> for Role {
    fn from(role: RoleDto) -> Self {
        match role {
            RoleDto::Admin => Role::Admin,
            RoleDto::User => Role::User,
        }
    }
}

/// Name of a role as stored in the database and in token claims.
pub fn role_name(role: Role) -> &'static str {
    match role {
        Role::Admin => "admin",
        Role::User => "user",
    }
}

/// Every assignable role.
pub const ROLES: [Role; 2] = [Role::Admin, Role::User];

/// Parameters for creating a user.
///
/// `password` is plain text; the service layer hashes it before storage.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub gender: Option<String>,
    pub role: Role,
}

impl CreateUserParam {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: Some(dto.password),
            phone: dto.phone,
            birthday: dto.birthday,
            gender: dto.gender,
            role: dto.role.map(Role::from).unwrap_or(Role::User),
        }
    }
}

/// Partial update of a user. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Plain text replacement password.
    pub password: Option<String>,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub gender: Option<String>,
    pub role: Option<Role>,
}

impl UpdateUserParam {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            phone: dto.phone,
            birthday: dto.birthday,
            gender: dto.gender,
            role: dto.role.map(Role::from),
        }
    }
}
