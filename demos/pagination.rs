//! Paging through an in-memory dataset.
//!
//! Run with: cargo run --example pagination

use cachestore::pagination::{IndexedDataset, get_hyper, get_page, index_range};

fn main() {
    let rows: Vec<String> = (1..=23).map(|i| format!("row-{i:02}")).collect();

    println!("index_range(3, 5) = {:?}", index_range(3, 5));
    println!("page 5 of 5 = {:?}", get_page(&rows, 5, 5));
    println!("page 9 of 5 = {:?}", get_page(&rows, 9, 5));
    println!("page 0 = {:?}", get_page(&rows, 0, 5));

    match get_hyper(&rows, 2, 10) {
        Ok(page) => println!(
            "hyper: page {} size {} prev {:?} next {:?} total {}",
            page.page, page.page_size, page.prev_page, page.next_page, page.total_pages
        ),
        Err(e) => println!("hyper: {e}"),
    }

    let mut dataset: IndexedDataset<String> = rows.into_iter().collect();
    let next = match dataset.get_hyper_index(Some(3), 2) {
        Ok(page) => {
            println!("index 3: {:?}, next_index {}", page.data, page.next_index);
            page.next_index
        },
        Err(e) => {
            println!("index 3: {e}");
            return;
        },
    };

    // A row the client has not reached yet disappears
    dataset.remove(next);
    if let Ok(page) = dataset.get_hyper_index(Some(next), 2) {
        println!("index {next}: {:?}, next_index {}", page.data, page.next_index);
    }
}

// Expected output:
// index_range(3, 5) = Ok(10..15)
// page 5 of 5 = Ok(["row-21", "row-22", "row-23"])
// page 9 of 5 = Ok([])
// page 0 = Err(InvalidPage)
// hyper: page 2 size 10 prev Some(1) next Some(3) total 3
// index 3: ["row-04", "row-05"], next_index 5
// index 5: ["row-07", "row-08"], next_index 8
