//! Arithmetic question generator

use std::fmt;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    const ALL: [Operation; 3] = [Self::Add, Self::Subtract, Self::Multiply];

    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathQuestion {
    pub a: i64,
    pub b: i64,
    pub op: Operation,
}

impl MathQuestion {
    /// Random question: sums use 1..=20 and 1..=10, differences the same
    /// ranges ordered so the result is never negative, products 1..=10 each.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let op = Operation::ALL[rng.gen_range(0..Operation::ALL.len())];
        match op {
            Operation::Add => Self {
                a: rng.gen_range(1..=20),
                b: rng.gen_range(1..=10),
                op,
            },
            Operation::Subtract => {
                let a = rng.gen_range(1..=20);
                let b = rng.gen_range(1..=10);
                Self {
                    a: a.max(b),
                    b: a.min(b),
                    op,
                }
            }
            Operation::Multiply => Self {
                a: rng.gen_range(1..=10),
                b: rng.gen_range(1..=10),
                op,
            },
        }
    }

    pub fn answer(&self) -> i64 {
        match self.op {
            Operation::Add => self.a + self.b,
            Operation::Subtract => self.a - self.b,
            Operation::Multiply => self.a * self.b,
        }
    }
}

impl fmt::Display for MathQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = ?", self.a, self.op.symbol(), self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_are_non_negative_and_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let q = MathQuestion::random(&mut rng);
            let answer = q.answer();
            assert!(answer >= 0);
            match q.op {
                Operation::Add => assert!((2..=30).contains(&answer)),
                Operation::Subtract => assert!(q.a >= q.b && answer <= 19),
                Operation::Multiply => assert!((1..=100).contains(&answer)),
            }
        }
    }

    #[test]
    fn test_display() {
        let q = MathQuestion {
            a: 7,
            b: 3,
            op: Operation::Multiply,
        };
        assert_eq!(q.to_string(), "7 × 3 = ?");
        assert_eq!(q.answer(), 21);
    }
}
