//! Storage-level checks against a real Postgres. Run with
//! `DATABASE_URL=postgres://... cargo test -- --ignored`.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use actix_web::{http::StatusCode, ResponseError};

use crate::api::error::{Error, SystemError};
use crate::modules::{
    child::{
        model::CreateChildProfile,
        repository::{ChildFriendRepository, ChildRepository},
        repository_pg::ChildRepositoryPg,
    },
    comment::{model::CreateComment, repository::CommentRepository, repository_pg::CommentRepositoryPg},
    guest::{model::CreateGuestProfile, repository::GuestRepository, repository_pg::GuestRepositoryPg},
    parent::{
        model::CreateParentProfile, repository::ParentRepository, repository_pg::ParentRepositoryPg,
    },
    post::{
        model::{CreatePost, UpdatePost},
        repository::PostRepository,
        repository_pg::PostRepositoryPg,
    },
    relationship::{
        repository::RelationshipRepository, repository_pg::RelationshipRepositoryPg,
        schema::RelationshipStatus,
    },
    user::{
        model::InsertUser, repository::UserRepository, repository_pg::UserRepositoryPg,
        schema::UserEntity,
    },
};

async fn user(pool: &PgPool, username: &str) -> UserEntity {
    UserRepositoryPg::new(pool.clone())
        .create(&InsertUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            hash_password: "x".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            is_parent: true,
            is_guest: false,
        })
        .await
        .unwrap()
}

fn post(title: &str, author_id: Uuid, likes_id: Option<Uuid>) -> CreatePost {
    CreatePost {
        title: title.to_string(),
        author_id,
        content: "content".to_string(),
        featured_image: None,
        media: None,
        likes_id,
    }
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}")).fetch_one(pool).await.unwrap()
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn duplicate_profile_names_conflict(pool: PgPool) {
    let owner = user(&pool, "mum").await;
    let parents = ParentRepositoryPg::new(pool.clone());
    let guests = GuestRepositoryPg::new(pool.clone());

    let parent = CreateParentProfile {
        parent_name: "Mum".to_string(),
        user_id: owner.id,
        profile_image: None,
    };
    let created = parents.create(&parent).await.unwrap();
    assert_eq!(created.profile_image, "placeholder");

    let err = parents.create(&parent).await.unwrap_err();
    assert!(matches!(
        err,
        SystemError::Conflict(Some(ref meta))
            if meta.constraint.as_deref() == Some("parent_profiles_parent_name_key")
    ));

    // uniqueness is per table
    let guest = CreateGuestProfile {
        guest_name: "Mum".to_string(),
        user_id: owner.id,
        profile_image: None,
    };
    guests.create(&guest).await.unwrap();
    assert!(matches!(guests.create(&guest).await, Err(SystemError::Conflict(_))));

    let children = ChildRepositoryPg::new(pool.clone());
    let child = CreateChildProfile {
        child_name: "Sam".to_string(),
        id_child: 1,
        parent_id: created.id,
        profile_image: None,
        birthdate: NaiveDate::from_ymd_opt(2019, 3, 4).unwrap(),
    };
    children.create(&child).await.unwrap();
    let err: Error = children.create(&child).await.unwrap_err().into();
    assert!(matches!(err, Error::Conflict(ref m) if m == "Name already exists"));

    let posts = PostRepositoryPg::new(pool.clone());
    posts.create(&post("Park", owner.id, None)).await.unwrap();
    let err: Error = posts.create(&post("Park", owner.id, None)).await.unwrap_err().into();
    assert!(matches!(err, Error::Conflict(ref m) if m == "Title already exists"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn oversized_column_value_is_bad_request(pool: PgPool) {
    let err = UserRepositoryPg::new(pool.clone())
        .create(&InsertUser {
            username: "mum".to_string(),
            email: format!("{}@example.com", "a".repeat(300)),
            hash_password: "x".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            is_parent: true,
            is_guest: false,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SystemError::BadRequest(_)));
    assert_eq!(Error::from(err).status_code(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn deleting_account_cascades(pool: PgPool) {
    let doomed = user(&pool, "doomed").await;
    let other = user(&pool, "other").await;

    let parent = ParentRepositoryPg::new(pool.clone())
        .create(&CreateParentProfile {
            parent_name: "Doomed parent".to_string(),
            user_id: doomed.id,
            profile_image: None,
        })
        .await
        .unwrap();
    let guest = GuestRepositoryPg::new(pool.clone())
        .create(&CreateGuestProfile {
            guest_name: "Doomed guest".to_string(),
            user_id: doomed.id,
            profile_image: None,
        })
        .await
        .unwrap();
    let children = ChildRepositoryPg::new(pool.clone());
    let child = children
        .create(&CreateChildProfile {
            child_name: "Sam".to_string(),
            id_child: 1,
            parent_id: parent.id,
            profile_image: None,
            birthdate: NaiveDate::from_ymd_opt(2019, 1, 2).unwrap(),
        })
        .await
        .unwrap();
    children.add_friend(&child.id, &other.id).await.unwrap();
    RelationshipRepositoryPg::new(pool.clone())
        .create(&child.id, &guest.id, RelationshipStatus::Send)
        .await
        .unwrap();

    let posts = PostRepositoryPg::new(pool.clone());
    let own_post = posts.create(&post("mine", doomed.id, None)).await.unwrap();
    let liked_post = posts.create(&post("liked", other.id, Some(doomed.id))).await.unwrap();
    let kept_post = posts.create(&post("kept", other.id, None)).await.unwrap();
    let comments = CommentRepositoryPg::new(pool.clone());
    comments
        .create(&CreateComment { user_id: doomed.id, post_id: kept_post.id, body: None })
        .await
        .unwrap();
    comments
        .create(&CreateComment { user_id: other.id, post_id: own_post.id, body: None })
        .await
        .unwrap();

    assert!(UserRepositoryPg::new(pool.clone()).delete(&doomed.id).await.unwrap());

    for table in [
        "parent_profiles",
        "guest_profiles",
        "child_profiles",
        "child_profile_friends",
        "relationships",
        "comments",
    ] {
        assert_eq!(count(&pool, table).await, 0, "{table} should be empty");
    }

    // the liked post goes with its liker
    assert!(posts.find_by_id(&own_post.id).await.unwrap().is_none());
    assert!(posts.find_by_id(&liked_post.id).await.unwrap().is_none());
    assert!(posts.find_by_id(&kept_post.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn like_count_and_save_stamps(pool: PgPool) {
    let author = user(&pool, "author").await;
    let fan = user(&pool, "fan").await;
    let posts = PostRepositoryPg::new(pool.clone());

    let created = posts.create(&post("Park", author.id, None)).await.unwrap();
    assert_eq!(created.number_of_likes(), 0);

    let liked = posts.set_like(&created.id, Some(fan.id)).await.unwrap().unwrap();
    assert_eq!(liked.number_of_likes(), 1);
    assert_eq!(liked.updated_at, liked.deleted_at);
    assert!(liked.updated_at >= created.updated_at);
    assert_eq!(liked.created_at, created.created_at);

    let edited = posts
        .update(&created.id, &UpdatePost { title: Some("Park again".to_string()), ..Default::default() })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(edited.title, "Park again");
    assert_eq!(edited.updated_at, edited.deleted_at);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn posts_and_comments_oldest_first(pool: PgPool) {
    let author = user(&pool, "author").await;
    for (title, age) in [("newest", 1), ("oldest", 3), ("middle", 2)] {
        sqlx::query(
            "INSERT INTO posts (id, title, author_id, content, created_at) VALUES ($1, $2, $3, '', NOW() - make_interval(hours => $4))",
        )
        .bind(Uuid::now_v7())
        .bind(title)
        .bind(author.id)
        .bind(age)
        .execute(&pool)
        .await
        .unwrap();
    }

    let posts = PostRepositoryPg::new(pool.clone()).find_all().await.unwrap();
    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["oldest", "middle", "newest"]);

    let post_id = posts[0].id;
    for (body, age) in [("late", 1), ("early", 2)] {
        sqlx::query(
            "INSERT INTO comments (id, user_id, post_id, body, created_on) VALUES ($1, $2, $3, $4, NOW() - make_interval(mins => $5))",
        )
        .bind(Uuid::now_v7())
        .bind(author.id)
        .bind(post_id)
        .bind(body)
        .bind(age)
        .execute(&pool)
        .await
        .unwrap();
    }

    let comments = CommentRepositoryPg::new(pool.clone()).find_by_post(&post_id).await.unwrap();
    let bodies: Vec<Option<&str>> = comments.iter().map(|c| c.body.as_deref()).collect();
    assert_eq!(bodies, [Some("early"), Some("late")]);
    assert_eq!(comments[0].to_string(), "oldest - author");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn relationship_status_is_restricted(pool: PgPool) {
    let owner = user(&pool, "owner").await;
    let parent = ParentRepositoryPg::new(pool.clone())
        .create(&CreateParentProfile {
            parent_name: "Dad".to_string(),
            user_id: owner.id,
            profile_image: None,
        })
        .await
        .unwrap();
    let guest = GuestRepositoryPg::new(pool.clone())
        .create(&CreateGuestProfile {
            guest_name: "Grandpa".to_string(),
            user_id: owner.id,
            profile_image: None,
        })
        .await
        .unwrap();
    let child = ChildRepositoryPg::new(pool.clone())
        .create(&CreateChildProfile {
            child_name: "Kim".to_string(),
            id_child: 2,
            parent_id: parent.id,
            profile_image: None,
            birthdate: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
        })
        .await
        .unwrap();

    let err = sqlx::query(
        "INSERT INTO relationships (id, sender_id, receiver_id, status) VALUES ($1, $2, $3, 'declined')",
    )
    .bind(Uuid::now_v7())
    .bind(child.id)
    .bind(guest.id)
    .execute(&pool)
    .await
    .map_err(SystemError::from)
    .unwrap_err();
    assert!(matches!(err, SystemError::BadRequest(_)));

    let relationships = RelationshipRepositoryPg::new(pool.clone());
    let first = relationships.create(&child.id, &guest.id, RelationshipStatus::Send).await.unwrap();
    relationships.create(&child.id, &guest.id, RelationshipStatus::Send).await.unwrap();

    let accepted =
        relationships.update_status(&first.id, RelationshipStatus::Accepted).await.unwrap().unwrap();
    assert_eq!(accepted.status, RelationshipStatus::Accepted);
    assert!(accepted.updated >= first.updated);

    let received = relationships.find_received(&guest.id).await.unwrap();
    assert_eq!(received.len(), 2);
    assert!(received.iter().any(|r| r.to_string() == "Kim-Grandpa-accepted"));
    assert!(received.iter().any(|r| r.to_string() == "Kim-Grandpa-send"));
}
