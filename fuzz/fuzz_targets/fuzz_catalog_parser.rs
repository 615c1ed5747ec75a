#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing must either succeed or return an error, never panic
    let whole = catalog2xlsx::catalog::parse_products(data);

    // The lazy iterator must agree with the eager parse
    if let Ok(streamer) = catalog2xlsx::catalog::ProductStreamer::new(data) {
        let mut streamed = Vec::new();
        for product in streamer.products() {
            match product {
                Ok(product) => streamed.push(product),
                Err(_) => break,
            }
        }
        if let Ok(products) = &whole {
            assert_eq!(products, &streamed);
        }
    }

    // Every accepted document must also render to a workbook
    if let Ok(products) = whole {
        let _ = catalog2xlsx::sheet::WorkbookExporter::new().export(&products);
    }
});
