use dotenvy::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::env;
use std::str::FromStr;

use roadtrip::database::schema;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in .env");
    let options = SqliteConnectOptions::from_str(&db_url)
        .expect("cannot parse DATABASE_URL")
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .expect("cannot connect to database");

    match schema::apply_schema(&pool).await {
        Ok(()) => {
            println!("schema pushed to {}", db_url);
        }
        Err(e) => {
            eprintln!("schema push failed: {}", e);
            std::process::exit(1);
        }
    }
}
