pub mod fractal_algorithm;
