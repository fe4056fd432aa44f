// SPDX-License-Identifier: MPL-2.0
//! Reference photo set shipped with the application.
//!
//! The keys match the files embedded from `assets/gallery/`.

use super::PhotoRecord;

/// Returns the five UED campus photos shown by default.
#[must_use]
pub fn ued_photos() -> Vec<PhotoRecord> {
    vec![
        PhotoRecord::new(
            "ued1.png",
            "Cổng Trường UED",
            "Vị trí: 459 Tôn Đức Thắng, Đà Nẵng",
        ),
        PhotoRecord::new(
            "ued2.png",
            "Tòa nhà Hành chính",
            "Thông tin: Khu làm việc – tiếp nhận sinh viên",
        ),
        PhotoRecord::new(
            "ued3.png",
            "Thư viện UED",
            "Thông tin: Không gian học tập & tài liệu",
        ),
        PhotoRecord::new("ued4.png", "Giảng đường", "Thông tin: Khu giảng dạy chính"),
        PhotoRecord::new(
            "ued5.png",
            "Hoạt động sinh viên",
            "Thông tin: CLB – Sự kiện – Ngoại khóa",
        ),
    ]
}
