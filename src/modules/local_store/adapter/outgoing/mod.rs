mod file_store;
mod in_memory_store;
mod redis_store;

pub use file_store::FileKeyValueStore;
pub use in_memory_store::InMemoryKeyValueStore;
pub use redis_store::RedisKeyValueStore;
