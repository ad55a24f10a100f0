use chained_map::ChainedMap;
#[cfg(feature = "sorted")]
use chained_map::SortedChainedMap;
use chained_map::map::MapError;

fn main() -> Result<(), MapError> {
    println!("\n[ChainedMap]\n");

    let mut table = ChainedMap::new(1024);
    table.set("betty", "cool")?;
    table.set("c", "fun")?;
    table.set("python", "awesome")?;

    println!("{table}");
    println!("betty -> {:?}", table.get("betty"));

    table.set("betty", "cooler")?;
    println!("betty -> {:?}", table.get("betty"));

    // println!("{table:#?}");
    // println!("{:?}", ChainedMap::try_new(0));

    #[cfg(feature = "sorted")]
    {
        println!("\n[SortedChainedMap]\n");

        let mut table = SortedChainedMap::new(1024);
        for (key, value) in [
            ("y", "1"),
            ("j", "2"),
            ("c", "3"),
            ("b", "4"),
            ("z", "5"),
            ("n", "6"),
            ("a", "7"),
            ("m", "8"),
        ] {
            table.set(key, value)?;
        }

        println!("{table}");
        println!("{}", table.display_rev());

        // for (key, value) in &table {
        //     println!("{key}: {value}");
        // }
    }

    Ok(())
}
