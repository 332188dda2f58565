//! Authentication parameters and results.

use chrono::NaiveDate;

use crate::{
    model::auth::{LoginDto, LoginResponseDto, RegisterDto, TokenPairDto},
    server::model::user::User,
};

/// Freshly issued access and refresh tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn into_dto(self) -> TokenPairDto {
        TokenPairDto {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
        }
    }
}

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub tokens: TokenPair,
    pub user: User,
}

impl LoginResult {
    pub fn into_dto(self) -> LoginResponseDto {
        LoginResponseDto {
            access_token: self.tokens.access_token,
            refresh_token: self.tokens.refresh_token,
            user: self.user.into_dto(),
        }
    }
}

/// Self-service registration. The role is always `user`.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub gender: Option<String>,
}

impl RegisterParam {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            phone: dto.phone,
            birthday: dto.birthday,
            gender: dto.gender,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}
