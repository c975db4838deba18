pub mod fallback;
pub mod index;
pub mod level0;
pub mod level1;
pub mod level2;
pub mod level3;
