use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};
use validator::Validate;

use crate::{
    dto::users::{CreateUserRequest, UpdateUserRequest},
    entity::users::{ActiveModel, Column, Entity as Users, Model as UserModel},
    error::{AppError, AppResult},
    models::User,
    response::{ApiResponse, MessageResponse},
    routes::params::UserSearchQuery,
    state::AppState,
};

/// Every filter is `($n IS NULL OR <predicate>)` so any subset may be omitted.
/// Values only ever travel as bind parameters.
pub const SEARCH_USERS_SQL: &str = r#"
    SELECT id, name, email, created_at, updated_at
    FROM users
    WHERE ($1::text IS NULL OR name ILIKE $1)
      AND ($2::text IS NULL OR email ILIKE $2)
      AND ($3::timestamptz IS NULL OR created_at >= $3)
    ORDER BY name ASC, id ASC
"#;

/// Bind values for [`SEARCH_USERS_SQL`], in parameter order.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchBindings {
    pub name_pattern: Option<String>,
    pub email_pattern: Option<String>,
    pub created_after: Option<DateTime<Utc>>,
}

impl SearchBindings {
    pub fn from_query(query: &UserSearchQuery) -> AppResult<Self> {
        Ok(Self {
            name_pattern: query.name().map(contains_pattern),
            email_pattern: query.email().map(contains_pattern),
            created_after: query.created_after()?,
        })
    }
}

/// `%value%` with LIKE metacharacters escaped, so the value matches literally.
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub async fn list_users(state: &AppState) -> AppResult<Vec<User>> {
    let users = Users::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(user_from_entity)
        .collect();
    Ok(users)
}

pub async fn get_user(state: &AppState, id: i32) -> AppResult<User> {
    Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(user_from_entity)
        .ok_or(AppError::NotFound)
}

pub async fn create_user(state: &AppState, payload: CreateUserRequest) -> AppResult<User> {
    payload.validate()?;
    let now = Utc::now();
    let active = ActiveModel {
        name: Set(payload.name),
        email: Set(payload.email),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    let user = active.insert(&state.orm).await?;
    tracing::info!(user_id = user.id, "user created");
    Ok(user_from_entity(user))
}

pub async fn update_user(
    state: &AppState,
    id: i32,
    payload: UpdateUserRequest,
) -> AppResult<ApiResponse<User>> {
    payload.validate()?;
    let existing = Users::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(u) => u,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(email) = payload.email {
        active.email = Set(email);
    }
    active.updated_at = Set(Utc::now().into());

    let user = active.update(&state.orm).await?;
    tracing::info!(user_id = user.id, "user updated");

    Ok(ApiResponse::success(
        "User updated",
        user_from_entity(user),
    ))
}

/// Removes the user; its profile goes with it through the foreign key cascade.
pub async fn delete_user(state: &AppState, id: i32) -> AppResult<MessageResponse> {
    let result = Users::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(user_id = id, "user deleted");

    Ok(MessageResponse::new("User deleted"))
}

pub async fn search_users(state: &AppState, query: UserSearchQuery) -> AppResult<Vec<User>> {
    let bindings = SearchBindings::from_query(&query)?;
    tracing::debug!(
        by_name = bindings.name_pattern.is_some(),
        by_email = bindings.email_pattern.is_some(),
        by_date = bindings.created_after.is_some(),
        "searching users"
    );

    let users = sqlx::query_as::<_, User>(SEARCH_USERS_SQL)
        .bind(bindings.name_pattern)
        .bind(bindings.email_pattern)
        .bind(bindings.created_after)
        .fetch_all(&state.pool)
        .await?;

    Ok(users)
}

fn user_from_entity(model: UserModel) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(name: Option<&str>, email: Option<&str>, created_after: Option<&str>) -> UserSearchQuery {
        UserSearchQuery {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            created_after: created_after.map(str::to_string),
        }
    }

    #[test]
    fn absent_filters_bind_null() {
        let bindings = SearchBindings::from_query(&query(None, None, None)).unwrap();
        assert_eq!(
            bindings,
            SearchBindings {
                name_pattern: None,
                email_pattern: None,
                created_after: None,
            }
        );
    }

    #[test]
    fn substrings_are_wrapped_in_wildcards() {
        let bindings =
            SearchBindings::from_query(&query(Some("dup"), Some("example.com"), None)).unwrap();
        assert_eq!(bindings.name_pattern.as_deref(), Some("%dup%"));
        assert_eq!(bindings.email_pattern.as_deref(), Some("%example.com%"));

        let padded = SearchBindings::from_query(&query(Some(" Dup"), None, None)).unwrap();
        assert_eq!(padded.name_pattern.as_deref(), Some("% Dup%"));
    }

    #[test]
    fn like_metacharacters_match_literally() {
        assert_eq!(contains_pattern("50%_off"), r"%50\%\_off%");
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
    }

    #[test]
    fn hostile_input_stays_out_of_sql_text() {
        let hostile = "x' OR '1'='1'; DROP TABLE users; --";
        let bindings =
            SearchBindings::from_query(&query(Some(hostile), Some(hostile), None)).unwrap();

        assert!(!SEARCH_USERS_SQL.contains(hostile));
        assert!(!SEARCH_USERS_SQL.contains('\''));
        assert_eq!(bindings.name_pattern, Some(format!("%{hostile}%")));
        assert_eq!(bindings.email_pattern, Some(format!("%{hostile}%")));
    }

    #[test]
    fn every_filter_is_null_guarded_and_conjoined() {
        let sql = SEARCH_USERS_SQL;
        assert!(sql.contains("($1::text IS NULL OR name ILIKE $1)"));
        assert!(sql.contains("($2::text IS NULL OR email ILIKE $2)"));
        assert!(sql.contains("($3::timestamptz IS NULL OR created_at >= $3)"));
        assert_eq!(sql.matches(" AND ").count(), 2);
        assert_eq!(sql.matches(" OR ").count(), 3);
        assert!(sql.contains("ORDER BY name ASC"));
    }

    #[test]
    fn invalid_date_fails_before_storage() {
        let err = SearchBindings::from_query(&query(None, None, Some("yesterday"))).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
