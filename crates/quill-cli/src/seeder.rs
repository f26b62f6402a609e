//! Fake data for local development.
//!
//! Every seeded account shares [`SEED_PASSWORD`]. Usernames and emails carry a
//! numeric suffix so a single run never collides with itself; rows that clash
//! with earlier runs are skipped.

use std::time::Instant;

use fake::Fake;
use fake::faker::internet::en::Username;
use fake::faker::lorem::en::{Paragraph, Sentence};
use quill_auth::hash_password;
use sqlx::{PgPool, Postgres, QueryBuilder};

pub const SEED_PASSWORD: &str = "password123";

// Postgres caps bind parameters per statement; 3 per row keeps us well under.
const BATCH_SIZE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedConfig {
    pub users: usize,
    pub posts_per_user: usize,
}

impl SeedConfig {
    pub fn new(users: usize, posts_per_user: usize) -> Self {
        Self {
            users,
            posts_per_user,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserSeed {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct PostSeed {
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub posts: usize,
}

pub fn generate_users(count: usize, password_hash: &str) -> Vec<UserSeed> {
    (0..count)
        .map(|idx| {
            let base: String = Username().fake();
            let base: String = base
                .to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .take(30)
                .collect();
            let base = if base.is_empty() { "user".to_string() } else { base };
            let username = format!("{}_{}", base, idx);

            UserSeed {
                email: format!("{}@example.com", username),
                username,
                password_hash: password_hash.to_string(),
            }
        })
        .collect()
}

pub fn generate_posts(user_ids: &[i64], posts_per_user: usize) -> Vec<PostSeed> {
    user_ids
        .iter()
        .flat_map(|&user_id| {
            (0..posts_per_user).map(move |_| {
                let title: String = Sentence(3..8).fake();
                let content: String = Paragraph(2..6).fake();
                PostSeed {
                    title: title.trim_end_matches('.').chars().take(200).collect(),
                    content,
                    user_id,
                }
            })
        })
        .collect()
}

pub async fn insert_users_batch(db: &PgPool, users: &[UserSeed]) -> Result<Vec<i64>, sqlx::Error> {
    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(users.len());

    for chunk in users.chunks(BATCH_SIZE) {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO users (username, email, password) ");
        builder.push_values(chunk, |mut row, user| {
            row.push_bind(&user.username)
                .push_bind(&user.email)
                .push_bind(&user.password_hash);
        });
        builder.push(" ON CONFLICT DO NOTHING RETURNING id");

        let chunk_ids: Vec<i64> = builder.build_query_scalar().fetch_all(&mut *tx).await?;
        ids.extend(chunk_ids);
    }

    tx.commit().await?;
    Ok(ids)
}

pub async fn insert_posts_batch(db: &PgPool, posts: &[PostSeed]) -> Result<usize, sqlx::Error> {
    let mut tx = db.begin().await?;
    let mut inserted = 0;

    for chunk in posts.chunks(BATCH_SIZE) {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO posts (title, content, user_id) ");
        builder.push_values(chunk, |mut row, post| {
            row.push_bind(&post.title)
                .push_bind(&post.content)
                .push_bind(post.user_id);
        });

        inserted += builder.build().execute(&mut *tx).await?.rows_affected() as usize;
    }

    tx.commit().await?;
    Ok(inserted)
}

/// Seeds users, then posts for each newly inserted user.
pub async fn seed_all(db: &PgPool, config: SeedConfig) -> anyhow::Result<SeedSummary> {
    let start_time = Instant::now();
    println!(
        "🌱 Seeding {} users with {} posts each...",
        config.users, config.posts_per_user
    );

    // One hash for every account: bcrypt is too slow to run per row.
    let password_hash = hash_password(SEED_PASSWORD)?;

    let users = generate_users(config.users, &password_hash);
    let user_ids = insert_users_batch(db, &users).await?;
    if user_ids.len() < users.len() {
        println!(
            "   Skipped {} users that already exist",
            users.len() - user_ids.len()
        );
    }

    let posts = generate_posts(&user_ids, config.posts_per_user);
    let post_count = insert_posts_batch(db, &posts).await?;

    println!(
        "   ✓ Seeded {} users and {} posts in {:.2?}",
        user_ids.len(),
        post_count,
        start_time.elapsed()
    );

    Ok(SeedSummary {
        users: user_ids.len(),
        posts: post_count,
    })
}
