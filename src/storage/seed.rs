//! Seed dataset loaded on first store creation.
//!
//! Greater Toronto Area landmarks, parks, campuses, malls and transit hubs so
//! the catalog is usable before any user input.

use crate::domain::LocationDraft;

/// `(name, address, latitude, longitude)` rows inserted in this order.
pub const SEED_LOCATIONS: &[(&str, &str, f64, f64)] = &[
    ("CN Tower", "290 Bremner Blvd, Toronto, ON", 43.6426, -79.3871),
    ("Ripley's Aquarium of Canada", "288 Bremner Blvd, Toronto, ON", 43.6424, -79.3859),
    ("Rogers Centre", "1 Blue Jays Way, Toronto, ON", 43.6414, -79.3894),
    ("Scotiabank Arena", "40 Bay St, Toronto, ON", 43.6435, -79.3791),
    ("Royal Ontario Museum", "100 Queens Park, Toronto, ON", 43.6677, -79.3948),
    ("Art Gallery of Ontario", "317 Dundas St W, Toronto, ON", 43.6540, -79.3923),
    ("Toronto Zoo", "2000 Meadowvale Rd, Toronto, ON", 43.8177, -79.1859),
    ("Ontario Science Centre", "770 Don Mills Rd, North York, ON", 43.7161, -79.3385),
    ("Casa Loma", "1 Austin Terrace, Toronto, ON", 43.6780, -79.4094),
    ("Nathan Phillips Square", "100 Queen St W, Toronto, ON", 43.6525, -79.3839),
    ("Harbourfront Centre", "235 Queens Quay W, Toronto, ON", 43.6387, -79.3823),
    ("Distillery District", "55 Mill St, Toronto, ON", 43.6500, -79.3596),
    ("St. Lawrence Market", "93 Front St E, Toronto, ON", 43.6487, -79.3716),
    ("Eaton Centre", "220 Yonge St, Toronto, ON", 43.6544, -79.3807),
    ("Toronto Islands", "9 Queens Quay W, Toronto, ON", 43.6205, -79.3781),
    ("High Park", "1873 Bloor St W, Toronto, ON", 43.6465, -79.4637),
    ("Riverdale Park", "550 Broadview Ave, Toronto, ON", 43.6696, -79.3538),
    ("Allan Gardens", "160 Gerrard St E, Toronto, ON", 43.6615, -79.3744),
    ("Trinity Bellwoods Park", "790 Queen St W, Toronto, ON", 43.6476, -79.4149),
    ("Humber Bay Park", "100 Humber Bay Park Rd W, Etobicoke, ON", 43.6167, -79.4783),
    ("Scarborough Bluffs Park", "1 Brimley Rd S, Scarborough, ON", 43.7111, -79.2316),
    ("Guild Park and Gardens", "201 Guildwood Pkwy, Scarborough, ON", 43.7402, -79.1863),
    ("Bluffer's Park Beach", "1 Brimley Rd S, Toronto, ON", 43.7132, -79.2334),
    ("Kew-Balmy Beach", "2075 Queen St E, Toronto, ON", 43.6673, -79.2963),
    ("Woodbine Beach", "1675 Lake Shore Blvd E, Toronto, ON", 43.6623, -79.3076),
    ("Ashbridges Bay Park", "1561 Lake Shore Blvd E, Toronto, ON", 43.6598, -79.3125),
    ("Cherry Beach", "1 Cherry St, Toronto, ON", 43.6335, -79.3494),
    ("Tommy Thompson Park", "1 Leslie St, Toronto, ON", 43.6224, -79.3342),
    ("Toronto Music Garden", "479 Queens Quay W, Toronto, ON", 43.6364, -79.3927),
    ("Centennial Park", "256 Centennial Park Rd, Etobicoke, ON", 43.6553, -79.5903),
    ("Sunnybrook Park", "1132 Leslie St, Toronto, ON", 43.7270, -79.3632),
    ("Downsview Park", "70 Canuck Ave, North York, ON", 43.7425, -79.4786),
    ("Black Creek Pioneer Village", "1000 Murray Ross Pkwy, North York, ON", 43.7734, -79.5105),
    ("York University", "4700 Keele St, North York, ON", 43.7735, -79.5019),
    ("University of Toronto", "27 King's College Cir, Toronto, ON", 43.6629, -79.3957),
    ("Toronto Metropolitan University", "350 Victoria St, Toronto, ON", 43.6576, -79.3789),
    ("OCAD University", "100 McCaul St, Toronto, ON", 43.6539, -79.3921),
    ("George Brown College", "160 Kendal Ave, Toronto, ON", 43.6767, -79.4112),
    ("Centennial College", "941 Progress Ave, Scarborough, ON", 43.7852, -79.2267),
    ("Seneca College Newnham Campus", "1750 Finch Ave E, North York, ON", 43.7953, -79.3498),
    ("Humber College North Campus", "205 Humber College Blvd, Etobicoke, ON", 43.7305, -79.6060),
    ("Humber College Lakeshore Campus", "2 Colonel Samuel Smith Park Dr, Etobicoke, ON", 43.5953, -79.5330),
    ("Durham College", "2000 Simcoe St N, Oshawa, ON", 43.9459, -78.8965),
    ("Ontario Tech University", "2000 Simcoe St N, Oshawa, ON", 43.9459, -78.8950),
    ("Pickering Town Centre", "1355 Kingston Rd, Pickering, ON", 43.8350, -79.0859),
    ("Oshawa Centre", "419 King St W, Oshawa, ON", 43.8962, -78.8736),
    ("Scarborough Town Centre", "300 Borough Dr, Toronto, ON", 43.7764, -79.2570),
    ("Fairview Mall", "1800 Sheppard Ave E, North York, ON", 43.7787, -79.3452),
    ("Yorkdale Shopping Centre", "3401 Dufferin St, Toronto, ON", 43.7254, -79.4523),
    ("Sherway Gardens", "25 The West Mall, Etobicoke, ON", 43.6108, -79.5588),
    ("Square One Shopping Centre", "100 City Centre Dr, Mississauga, ON", 43.5934, -79.6440),
    ("Erin Mills Town Centre", "5100 Erin Mills Pkwy, Mississauga, ON", 43.5582, -79.7155),
    ("Bramalea City Centre", "25 Peel Centre Dr, Brampton, ON", 43.7164, -79.7243),
    ("Brampton City Hall", "2 Wellington St W, Brampton, ON", 43.6843, -79.7600),
    ("Mississauga Civic Centre", "300 City Centre Dr, Mississauga, ON", 43.5896, -79.6444),
    ("Living Arts Centre", "4141 Living Arts Dr, Mississauga, ON", 43.5919, -79.6427),
    ("Port Credit Lighthouse", "105 Lakeshore Rd W, Mississauga, ON", 43.5487, -79.5864),
    ("Jack Darling Memorial Park", "1180 Lakeshore Rd W, Mississauga, ON", 43.5292, -79.6213),
    ("Lakefront Promenade Park", "800 Lakefront Promenade, Mississauga, ON", 43.5530, -79.5625),
    ("Marie Curtis Park", "2 Forty Second St, Etobicoke, ON", 43.5930, -79.5427),
    ("Humber River Arch Bridge", "2 Humber River Rd, Toronto, ON", 43.6376, -79.4761),
    ("Weston Lions Park", "2125 Lawrence Ave W, York, ON", 43.7009, -79.5101),
    ("Christie Pits Park", "750 Bloor St W, Toronto, ON", 43.6645, -79.4197),
    ("Dufferin Grove Park", "875 Dufferin St, Toronto, ON", 43.6579, -79.4306),
    ("Queen's Park", "110 Wellesley St W, Toronto, ON", 43.6629, -79.3941),
    ("Yonge-Dundas Square", "1 Dundas St E, Toronto, ON", 43.6561, -79.3802),
    ("Toronto City Hall", "100 Queen St W, Toronto, ON", 43.6525, -79.3839),
    ("Toronto Public Library", "789 Yonge St, Toronto, ON", 43.6710, -79.3868),
    ("Union Station", "65 Front St W, Toronto, ON", 43.6452, -79.3806),
    ("Billy Bishop Toronto City Airport", "2 Eireann Quay, Toronto, ON", 43.6287, -79.3960),
    ("Pearson International Airport", "6301 Silver Dart Dr, Mississauga, ON", 43.6777, -79.6248),
    ("Ontario Place", "955 Lake Shore Blvd W, Toronto, ON", 43.6295, -79.4141),
    ("Exhibition Place", "100 Princes' Blvd, Toronto, ON", 43.6333, -79.4187),
    ("Fort York", "250 Fort York Blvd, Toronto, ON", 43.6370, -79.4043),
    ("Hockey Hall of Fame", "30 Yonge St, Toronto, ON", 43.6473, -79.3777),
    ("Elgin and Winter Garden Theatre", "189 Yonge St, Toronto, ON", 43.6549, -79.3793),
    ("Princess of Wales Theatre", "300 King St W, Toronto, ON", 43.6469, -79.3905),
    ("Roy Thomson Hall", "60 Simcoe St, Toronto, ON", 43.6469, -79.3854),
    ("St. Michael's Cathedral Basilica", "65 Bond St, Toronto, ON", 43.6567, -79.3776),
    ("St. James Cathedral", "106 King St E, Toronto, ON", 43.6505, -79.3740),
    ("St. Paul's Bloor Street", "227 Bloor St E, Toronto, ON", 43.6718, -79.3830),
    ("Massey Hall", "178 Victoria St, Toronto, ON", 43.6555, -79.3787),
    ("Meridian Hall", "1 Front St E, Toronto, ON", 43.6478, -79.3757),
    ("Canada's Wonderland", "1 Canada's Wonderland Dr, Vaughan, ON", 43.8430, -79.5393),
    ("Vaughan Mills", "1 Bass Pro Mills Dr, Vaughan, ON", 43.8256, -79.5390),
    ("Reptilia Zoo Vaughan", "2501 Rutherford Rd, Vaughan, ON", 43.8281, -79.5568),
    ("Kortright Centre for Conservation", "9550 Pine Valley Dr, Vaughan, ON", 43.8320, -79.6283),
    ("Markville Mall", "5000 Hwy 7, Markham, ON", 43.8667, -79.2722),
    ("Markham Museum", "9350 Hwy 48, Markham, ON", 43.8951, -79.2545),
    ("Pacific Mall", "4300 Steeles Ave E, Markham, ON", 43.8235, -79.3063),
    ("Toogood Pond Park", "58 Sciberras Rd, Markham, ON", 43.8723, -79.3154),
    ("Main Street Unionville", "197 Main St, Unionville, ON", 43.8691, -79.3095),
    ("Ajax Waterfront Park", "955 Lake Dr W, Ajax, ON", 43.8285, -79.0161),
    ("Whitby Harbour", "301 Watson St W, Whitby, ON", 43.8619, -78.9422),
    ("Oshawa Valley Botanical Gardens", "155 Arena St, Oshawa, ON", 43.9009, -78.8582),
    ("Darlington Provincial Park", "1600 Darlington Park Rd, Bowmanville, ON", 43.8685, -78.7575),
    ("Bowmanville Zoo", "340 King St E, Bowmanville, ON", 43.9136, -78.6781),
    ("Cobourg Beach", "138 Division St, Cobourg, ON", 43.9598, -78.1641),
    ("Aga Khan Museum", "77 Wynford Dr, North York, ON", 43.7250, -79.3331),
    ("Toronto Botanical Garden", "777 Lawrence Ave E, North York, ON", 43.7330, -79.3646),
];

/// Returns the seed rows as drafts, in insertion order.
#[must_use]
pub fn seed_drafts() -> Vec<LocationDraft> {
    SEED_LOCATIONS
        .iter()
        .map(|&(name, address, latitude, longitude)| {
            LocationDraft::new(name, address, latitude, longitude)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_row_has_a_name() {
        assert!(SEED_LOCATIONS.len() >= 100);
        assert!(SEED_LOCATIONS.iter().all(|(name, _, _, _)| !name.trim().is_empty()));
    }

    #[test]
    fn names_are_distinct() {
        let names: HashSet<_> = SEED_LOCATIONS.iter().map(|(name, _, _, _)| name.to_lowercase()).collect();
        assert_eq!(names.len(), SEED_LOCATIONS.len());
    }

    #[test]
    fn drafts_keep_order() {
        let drafts = seed_drafts();
        assert_eq!(drafts.first().map(|d| d.name.as_str()), Some("CN Tower"));
        assert_eq!(drafts.len(), SEED_LOCATIONS.len());
    }
}
