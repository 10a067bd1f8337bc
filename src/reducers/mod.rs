// Flow-specific reducers. Each `update` returns `true` when it consumed the
// message.
pub mod cbc;
pub mod visual;
