mod pg_pool;
mod pg_project_repository;

pub use pg_pool::create_pool;
pub use pg_project_repository::PgProjectRepository;
