use rand::Rng;

use convex_angle_hull::{generate_angle_hull, Angle, ConvexHull, Point};

fn main() {
    let n = 100_000; // replace with the number of points you want
    let mut rng = rand::thread_rng();
    let points: Vec<Point> = (0..n)
        .map(|_| Point::new(rng.gen_range(-50_000..50_000), rng.gen_range(-50_000..50_000)))
        .collect();

    let hull = ConvexHull::build(&points);
    let angle_hull = generate_angle_hull(&hull, Angle::from_deg(150.0)).unwrap();
    println!("{} arcs", angle_hull.len());
}
