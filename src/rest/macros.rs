/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Calls a read method and pulls one field out of the response
macro_rules! obj_from_method {
    ( $s:expr, $m:expr, $params:expr, $rt:ty, $r:ident ) => {{
        $s.get::<$rt>($m, $params).await.map(|v| v.$r)
    }};
}

// Calls a write method and pulls one field out of the response
macro_rules! obj_from_write_method {
    ( $s:expr, $m:expr, $params:expr, $rt:ty, $r:ident ) => {{
        $s.post::<$rt>($m, $params).await.map(|v| v.$r)
    }};
}

// Pages through a list method, yielding each photo. The response field `$r`
// must carry `pages` and `photos`.
macro_rules! stream_photo_pages {
    ( $s:expr, $m:expr, $params:expr, $rt:ty, $r:ident ) => {{
        let session = $s;
        let params = $params;
        try_stream! {
            let mut page: u32 = 1;
            loop {
                let mut page_params = params.clone();
                page_params.push("page", page);
                let resp = session.get::<$rt>($m, page_params).await?.$r;

                let is_done = resp.photos.is_empty() || page >= resp.pages;
                for photo in resp.photos {
                    yield photo
                }

                if is_done {
                    break;
                }
                page += 1;
            }
        }
    }};
}

pub(crate) use {obj_from_method, obj_from_write_method, stream_photo_pages};
