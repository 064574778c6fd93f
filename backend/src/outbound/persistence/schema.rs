//! Diesel table definitions mirroring `backend/migrations`.
//!
//! `seq` columns are assigned by the database and only used to list rows in
//! insertion order.

diesel::table! {
    /// Registered accounts. `username` carries a unique index.
    users (id) {
        seq -> Int8,
        id -> Uuid,
        username -> Varchar,
        name -> Nullable<Varchar>,
        password_hash -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Blog posts. `owner_id` is cleared if the owning user row goes away.
    blogs (id) {
        seq -> Int8,
        id -> Uuid,
        title -> Varchar,
        author -> Varchar,
        url -> Varchar,
        likes -> Int8,
        owner_id -> Nullable<Uuid>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Ownership links listed on each user, in link order.
    user_blogs (user_id, blog_id) {
        seq -> Int8,
        user_id -> Uuid,
        blog_id -> Uuid,
    }
}

diesel::joinable!(blogs -> users (owner_id));
diesel::joinable!(user_blogs -> blogs (blog_id));

diesel::allow_tables_to_appear_in_same_query!(users, blogs, user_blogs);
