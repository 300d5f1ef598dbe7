//! Build script for embedded migrations.
//!
//! `sqlx::migrate!` reads `data/sql/sqlite` at compile time, so cargo has to
//! rebuild when a migration file is added or edited.

fn main() {
    println!("cargo:rerun-if-changed=data/sql/sqlite");
}
