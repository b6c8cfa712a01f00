pub mod bfprt;
pub mod bucket_sort;
pub mod common;
pub mod elementary;
pub mod heap;
pub mod merge_sort;
pub mod quick_sort;
pub mod shell_sort;
pub mod top_k;
