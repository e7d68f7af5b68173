//! Byte-exact renderings of complete charts.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use tabula_chart::{Chart, ChartOptions, FormatSpec};
use tabula_sequence::{FloatSequence, IntSequence, Sequence};
use tabula_testkit::{read_temp_file, spawn_producer, temp_file};

fn render(xs: &dyn Sequence, ys: &dyn Sequence, options: ChartOptions) -> String {
    Chart::new(xs, ys, &options).unwrap().to_string()
}

fn y_format(spec: &str) -> ChartOptions {
    ChartOptions::new().with_y_format(FormatSpec::parse(spec).unwrap())
}

/// Number of partitions of 0..=n.
fn partitions(n: usize) -> Vec<BigInt> {
    let mut p = vec![BigInt::zero(); n + 1];
    p[0] = BigInt::one();
    for part in 1..=n {
        for total in part..=n {
            let smaller = p[total - part].clone();
            p[total] += smaller;
        }
    }
    p
}

fn is_harshad(n: i64) -> bool {
    let mut digits = 0;
    let mut m = n;
    while m > 0 {
        digits += m % 10;
        m /= 10;
    }
    n % digits == 0
}

/// Numbers whose only prime factors are 3, 5 and 7, ascending.
fn ugly_numbers(limit: i64) -> Vec<i64> {
    (1..=limit)
        .filter(|&n| {
            let mut m = n;
            for p in [3, 5, 7] {
                while m % p == 0 {
                    m /= p;
                }
            }
            m == 1
        })
        .collect()
}

#[test]
fn test_squares() {
    let xs = IntSequence::new(1, 1, 10);
    let ys = xs.apply(|x| x * x);
    let chart = Chart::new(&xs, &ys, &ChartOptions::new()).unwrap();
    let mut out = Vec::new();
    let n = chart.write_to(&mut out).unwrap();
    let expected = "\
+--+---+
| 1|  1|
| 2|  4|
| 3|  9|
| 4| 16|
| 5| 25|
| 6| 36|
| 7| 49|
| 8| 64|
| 9| 81|
|10|100|
+--+---+
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
    assert_eq!(n, expected.len());
    assert_eq!(n, 108);
}

#[test]
fn test_square_roots() {
    let xs = FloatSequence::new(1.0, 1.0, 100);
    let ys = xs.apply(f64::sqrt);
    assert_eq!(
        render(&xs, &ys, y_format("%.4f").with_columns(4)),
        include_str!("golden/square_roots.txt")
    );
}

#[test]
fn test_fraction_digits() {
    let xs = FloatSequence::new(1.01, 0.01, 5);
    let ys = xs.apply(f64::sqrt);
    assert_eq!(
        render(&xs, &ys, ChartOptions::new().with_fraction_digits(3, 4)),
        include_str!("golden/fraction_digits.txt")
    );
}

#[test]
fn test_inverse() {
    let xs = FloatSequence::new(1.0, 1.0, 300);
    let ys = xs.apply_inverse(|x| x.powf(x), 1.0, 5.0).unwrap();
    assert_eq!(
        render(&xs, &ys, y_format("%.4f").with_rows(50)),
        include_str!("golden/inverse_x_to_the_x.txt")
    );
}

#[test]
fn test_sines() {
    let xs = FloatSequence::new(0.01, 0.01, 157);
    let ys = xs.apply(f64::sin);
    let options = y_format("%.4f")
        .with_x_format(FormatSpec::parse("%.2f").unwrap())
        .with_rows(50);
    assert_eq!(
        render(&xs, &ys, options),
        include_str!("golden/sines.txt")
    );
}

#[test]
fn test_partitions() {
    let p = partitions(100);
    let xs = IntSequence::new(1, 1, 100);
    let ys = xs.apply(|x| p[x as usize].clone());
    assert_eq!(
        render(&xs, &ys, ChartOptions::new().with_rows(25)),
        include_str!("golden/partitions.txt")
    );
}

#[test]
fn test_factors_lookup() {
    let factors: Vec<i64> = (1..=100).filter(|d| 100 % d == 0).collect();
    let xs = IntSequence::new(1, 1, factors.len());
    let ys = xs.apply_lookup(&factors).unwrap();
    assert_eq!(
        render(&xs, &ys, ChartOptions::new()),
        include_str!("golden/factors_of_100.txt")
    );
}

#[test]
fn test_harshad_stream() {
    let xs = IntSequence::new(1, 1, 100);
    let ys = xs.apply_stream((1i64..).filter(|&n| is_harshad(n))).unwrap();
    assert_eq!(
        render(&xs, &ys, ChartOptions::new().with_columns(4)),
        include_str!("golden/harshad_numbers.txt")
    );
}

#[test]
fn test_ugly_numbers_from_channel() {
    let xs = IntSequence::new(1, 1, 100);
    let ys = xs
        .apply_ascending_stream(spawn_producer(ugly_numbers(40_000)))
        .unwrap();
    assert_eq!(
        render(&xs, &ys, ChartOptions::new().with_columns(4)),
        include_str!("golden/ugly_numbers.txt")
    );
}

#[test]
fn test_render_to_file() {
    let xs = FloatSequence::new(1.01, 0.01, 5);
    let ys = xs.apply(f64::sqrt);
    let chart = Chart::new(&xs, &ys, &ChartOptions::new().with_fraction_digits(3, 4)).unwrap();
    let mut file = temp_file();
    let n = chart.write_to(&mut file).unwrap();
    let text = read_temp_file(&mut file);
    assert_eq!(n, text.len());
    assert_eq!(text, include_str!("golden/fraction_digits.txt"));
}
