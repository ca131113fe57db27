fn main() { dmat_tasks::entry_points::dmat_reduce(); }
