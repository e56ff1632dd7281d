pub mod avltree;
pub mod bench;
pub mod cmp;
pub mod sort;
pub mod student;
pub mod util;
