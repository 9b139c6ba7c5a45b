use standard_vector::collections::contiguous::Vector;
use standard_vector::collections::traits::TryClone;

#[derive(Debug)]
struct Fragile(u8);

impl TryClone for Fragile {
    type Error = String;

    fn try_clone(&self) -> Result<Self, Self::Error> {
        if self.0 == 13 {
            Err(format!("Refusing to copy {}", self.0))
        } else {
            Ok(Fragile(self.0))
        }
    }
}

impl Drop for Fragile {
    fn drop(&mut self) {
        println!("Dropped Fragile({})", self.0);
    }
}

fn main() {
    println!("\n[Vector]\n");

    let mut vec = Vector::<u8>::new();
    println!("{:?}", vec);

    for i in 0..8 {
        if let Err(never) = vec.push(i) {
            match never {}
        }
        println!("{:?}", vec);
    }

    println!("{:?}", vec.insert(2, 100));
    println!("{:?}", vec.erase(3));
    println!("{}", vec);

    println!("\n[Failing copies]\n");

    let mut vec = Vector::new();
    for i in 10..14 {
        if let Err(error) = vec.push(Fragile(i)) {
            println!("{}", error);
        }
    }
    println!("{:?}", vec);

    // Full, so the next push copies everything into a new allocation, which fails on 13.
    match vec.push(Fragile(14)) {
        Ok(()) => println!("Pushed 14"),
        Err(error) => println!("{}, still {:?}", error, vec),
    }
}
