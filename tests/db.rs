use catalog_agent::db::run_migrations;
use catalog_agent::schema::products;
use diesel::prelude::*;

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}

#[test]
fn migrations_can_run_twice() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();

    run_migrations(&pool).expect("second migration run should be a no-op");

    let mut conn = pool.get().expect("connection");
    let count: i64 = products::table
        .count()
        .get_result(&mut conn)
        .expect("products table should exist");
    assert_eq!(count, 0);
}
