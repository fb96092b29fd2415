//! Built-in seed data: the Nagoya winter trip (12/18–12/22).
//!
//! The whole dataset lives here as one explicit immutable structure and
//! is injected into the planner at construction, so tests can swap in
//! fixtures instead.

use crate::models::day::{Day, Hotel, Weather, WeatherIcon};
use crate::models::event::{EventCategory, ItineraryEvent};
use crate::models::reference::{EmergencyContact, FlightSegment, SouvenirItem};
use crate::models::trip::Trip;

/// The complete five-day trip: schedule, flights, emergency contacts,
/// and the souvenir checklist.
#[must_use]
pub fn nagoya_winter_trip() -> Trip {
    Trip {
        days: vec![day_1(), day_2(), day_3(), day_4(), day_5()],
        flights: flights(),
        contacts: emergency_contacts(),
        souvenirs: souvenir_list(),
    }
}

fn day_1() -> Day {
    Day::new(
        1,
        "12/18 (四)",
        "Day 1｜犬山城半日遊 & 榮夜景",
        Weather::new(
            "4°C - 12°C",
            WeatherIcon::Sun,
            "晴時多雲",
            "建議洋蔥式穿搭，犬山城風大需圍巾。",
        ),
        Hotel::new("名古屋站前大和 Roynet 飯店", "名駅南 1-23-20", "14:00"),
        vec![
            ItineraryEvent::new("1-1", "02:55", "樂桃 MM722 飛行中", EventCategory::Transport)
                .with_note("補眠時間 / 預計 06:25 抵達中部國際機場"),
            ItineraryEvent::new("1-2", "07:30", "名鐵特急 → 名古屋站", EventCategory::Transport)
                .with_note("入境領行李後，搭乘名鐵前往市區"),
            ItineraryEvent::new("1-3", "09:00", "Tsubame Bread & Milk", EventCategory::Food)
                .with_highlight("必吃：北海道紅豆奶油吐司")
                .with_guide(
                    "名古屋特有的「早餐文化」代表。吐司非常厚實柔軟，鮮奶油不膩口。建議先去抽號碼牌再寄放行李。",
                ),
            ItineraryEvent::new("1-4", "10:00", "名鐵犬山線移動", EventCategory::Transport)
                .with_note("前往犬山遊園站，約 30 分鐘車程"),
            ItineraryEvent::new("1-5", "11:00", "犬山城 & 城下町", EventCategory::Sight)
                .with_highlight("必看：國寶天守閣、愛心繪馬")
                .with_guide(
                    "1. 犬山城是日本僅存五座「國寶」之一，木造樓梯非常陡(約50度)，女生請避免穿短裙。\n2. 頂樓景色無敵，可俯瞰木佐川。\n3. 下山必去「三光稻荷神社」洗錢(加倍奉還)並在粉紅愛心繪馬牆拍照。",
                ),
            ItineraryEvent::new("1-6", "12:00", "Seimen Misaku", EventCategory::Food)
                .with_highlight("必吃：雞醬油拉麵")
                .with_guide(
                    "米其林推薦名店。湯頭清澈但雞味濃郁，麵條有嚼勁。記得一定要先抽號碼牌。",
                ),
            ItineraryEvent::new("1-7", "15:00", "返回名古屋站", EventCategory::Transport)
                .with_note("名鐵線回程，稍作休息 Check-in"),
            ItineraryEvent::new(
                "1-8",
                "16:30",
                "榮商圈 (Oasis 21 / 電視塔)",
                EventCategory::Sight,
            )
            .with_highlight("必拍：水的宇宙船夜景")
            .with_guide(
                "傍晚去 Oasis 21 頂樓「水的宇宙船」散步，地板是透明玻璃與水池。推薦在日落時分拍攝中部電力塔（電視塔）點燈，是名古屋最經典的都會夜景。",
            ),
            ItineraryEvent::new("1-9", "19:00", "月島文字燒 & HARBS", EventCategory::Food)
                .with_highlight("必吃：明太子麻糬文字燒、水果千層")
                .with_guide(
                    "文字燒要自己動手煎才好玩（雖然店員也會幫忙）。吃完正餐一定要去 HARBS 榮本店，這裡是發源地，水果千層蛋糕是絕對王者。",
                ),
        ],
    )
}

fn day_2() -> Day {
    Day::new(
        2,
        "12/19 (五)",
        "Day 2｜吉卜力公園全攻略",
        Weather::new(
            "3°C - 11°C",
            WeatherIcon::Cloud,
            "多雲陰天",
            "園區很大都在走路，請穿最好走的鞋。",
        ),
        Hotel::new("名古屋站前大和 Roynet 飯店", "續住", "-"),
        vec![
            ItineraryEvent::new(
                "2-1",
                "07:00",
                "地鐵東山線 → 磁浮丘陵線",
                EventCategory::Transport,
            )
            .with_note("於藤丘站轉乘 Linimo 至愛地球博公園"),
            ItineraryEvent::new(
                "2-2",
                "08:00",
                "吉卜力公園 (Ghibli Park)",
                EventCategory::Sight,
            )
            .with_highlight("必看：吉卜力大倉庫、無臉男合照")
            .with_guide(
                "1. 沒有大型遊樂設施，重點是「沉浸式場景」。\n2. 「吉卜力大倉庫」內容最豐富，進場先衝去排「名場面展」跟無臉男拍照（通常要排1小時）。\n3. 仔細看角落，處處都有小煤炭球或借物少女的細節。",
            ),
            ItineraryEvent::new("2-3", "17:00", "返回名古屋市區", EventCategory::Transport)
                .with_note("帶著戰利品回程"),
            ItineraryEvent::new(
                "2-4",
                "19:00",
                "矢場味噌豬排 (Yabaton)",
                EventCategory::Food,
            )
            .with_highlight("必吃：鐵板味噌豬排")
            .with_guide(
                "名古屋名物之首！上桌時店員會在你面前淋上滾燙的味噌醬，「滋滋」作響超誘人。醬汁偏甜濃郁，非常下飯，建議加點蔥花解膩。",
            ),
        ],
    )
}

fn day_3() -> Day {
    Day::new(
        3,
        "12/20 (六)",
        "Day 3｜歷史散策 & 港口花火",
        Weather::new(
            "5°C - 13°C",
            WeatherIcon::Sun,
            "晴朗乾燥",
            "海邊晚上看煙火極冷，帽子手套暖暖包必備。",
        ),
        Hotel::new("金星 Neo 飯店", "新榮 2-45-8", "20:30"),
        vec![
            ItineraryEvent::new(
                "3-1",
                "09:00",
                "客美多咖啡 (Komeda)",
                EventCategory::Food,
            )
            .with_highlight("體驗：點飲料送早餐")
            .with_guide(
                "名古屋發源的早餐文化。只要點一杯咖啡，就免費送厚片吐司（可選紅豆泥、水煮蛋或蛋沙拉）。",
            ),
            ItineraryEvent::new("3-2", "10:15", "名古屋城", EventCategory::Sight)
                .with_highlight("必看：金鯱、本丸御殿")
                .with_guide(
                    "天守閣屋頂的「金鯱」是名古屋的象徵。雖然天守閣目前整修無法進入，但修復完工的「本丸御殿」極致奢華，金箔壁畫與格狀天花板令人嘆為觀止，一定要進去參觀。",
                ),
            ItineraryEvent::new(
                "3-3",
                "12:00",
                "熱田蓬萊軒 & 熱田神宮",
                EventCategory::Sight,
            )
            .with_highlight("必吃：鰻魚飯三吃、必看：信長塀")
            .with_guide(
                "1. 鰻魚飯三吃（Hitsumabushi）：一吃原味、二加佐料（海苔/蔥/芥末）、三加高湯變茶泡飯。\n2. 熱田神宮是日本三大神宮之一，供奉草薙劍。別錯過「信長塀」，是織田信長出征桶狹間前祈願成功後捐贈的圍牆。",
            ),
            ItineraryEvent::new(
                "3-4",
                "15:30",
                "地鐵名城線 → 名港線",
                EventCategory::Transport,
            )
            .with_note("前往名古屋港水族館周邊"),
            ItineraryEvent::new("3-5", "16:00", "名古屋港水族館", EventCategory::Sight)
                .with_highlight("必看：虎鯨表演、沙丁魚龍捲風")
                .with_guide(
                    "日本少數擁有虎鯨（殺人鯨）的水族館。黑潮大水槽的沙丁魚群舞也非常震撼。傍晚可在港邊散步看南極觀測船富士號。",
                ),
            ItineraryEvent::new("3-6", "18:30", "ISOGAI 花火劇場", EventCategory::Sight)
                .with_highlight("重點：冬季煙火配音樂")
                .with_guide(
                    "冬天的空氣比夏天乾淨，煙火看起來會更清晰銳利。這是一場結合聖誕故事與音樂的煙火劇，非常浪漫。",
                ),
            ItineraryEvent::new("3-7", "20:00", "移動至新飯店", EventCategory::Transport)
                .with_note("取行李前往金星Neo飯店 (千種區)"),
        ],
    )
}

fn day_4() -> Day {
    Day::new(
        4,
        "12/21 (日)",
        "Day 4｜飛驒高山・合掌村",
        Weather::new(
            "-2°C - 5°C",
            WeatherIcon::Snow,
            "山區降雪",
            "山區極冷！發熱衣、防滑鞋、毛帽、手套。",
        ),
        Hotel::new("Dormy Inn PREMIUM 榮", "錦 2-20-1", "20:00"),
        vec![
            ItineraryEvent::new("4-1", "08:00", "巴士一日團出發", EventCategory::Transport)
                .with_note("名古屋站太閣通口集合，路程約 2.5 小時"),
            ItineraryEvent::new("4-2", "10:00", "高山老街 (三町筋)", EventCategory::Sight)
                .with_highlight("必吃：飛驒牛握壽司")
                .with_guide(
                    "有「小京都」之稱。必去宮川朝市逛逛。不可錯過放在仙貝上的「飛驒牛握壽司」，入口即化。老街的味噌店和清酒釀造廠也很值得一逛。",
                ),
            ItineraryEvent::new("4-3", "14:00", "白川鄉合掌村", EventCategory::Sight)
                .with_highlight("必看：和田家、城山展望台")
                .with_guide(
                    "世界文化遺產。如果有時間，一定要搭接駁車或走到「城山展望台」，那裡才能拍出像明信片一樣、三間小屋並排的經典全景。",
                ),
            ItineraryEvent::new(
                "4-4",
                "20:00",
                "Dormy Inn 溫泉 & 宵夜",
                EventCategory::Relax,
            )
            .with_highlight("福利：夜鳴拉麵")
            .with_guide(
                "回到市區累了一天，Dormy Inn 最棒的就是它的天然溫泉大浴場。泡完湯記得去餐廳享用免費提供的醬油拉麵（夜鳴そば），簡單卻超撫慰人心。",
            ),
        ],
    )
}

fn day_5() -> Day {
    Day::new(
        5,
        "12/22 (一)",
        "Day 5｜大須文化 & 招財貓",
        Weather::new(
            "6°C - 14°C",
            WeatherIcon::Sun,
            "晴時多雲",
            "輕鬆便裝，方便在商場試穿衣服。",
        ),
        Hotel::new("溫暖的家", "Taiwan", "-"),
        vec![
            ItineraryEvent::new("5-1", "09:30", "地鐵鶴舞線", EventCategory::Transport)
                .with_note("前往大須觀音站，寄放行李"),
            ItineraryEvent::new(
                "5-2",
                "10:00",
                "大須觀音 & 商店街",
                EventCategory::Shopping,
            )
            .with_highlight("必逛：Alice on Wednesday、二手衣")
            .with_guide(
                "名古屋最混搭的商店街。有莊嚴的大須觀音寺，旁邊卻是動漫店、女僕咖啡和復古二手衣店。「星期三的愛麗絲」入口是個小門，要彎腰才能進去，非常有愛麗絲夢遊仙境的感覺。",
            ),
            ItineraryEvent::new("5-3", "15:30", "名鐵線 → 常滑", EventCategory::Transport)
                .with_note("前往 Aeon Mall 常滑"),
            ItineraryEvent::new(
                "5-4",
                "16:00",
                "常滑 Aeon & 招財貓",
                EventCategory::Shopping,
            )
            .with_highlight("必看：巨大招財貓 Tokonyan")
            .with_guide(
                "常滑是招財貓的故鄉。Aeon Mall 旁邊有一個巨大的招財貓頭部地標，非常可愛。商場內很大，是上飛機前最後衝刺掃貨的好地方。",
            ),
            ItineraryEvent::new("5-5", "19:30", "前往中部國際機場", EventCategory::Transport)
                .with_note("搭乘名鐵一站即達"),
            ItineraryEvent::new("5-6", "22:45", "樂桃 MM723 返台", EventCategory::Transport)
                .with_note("滿載而歸，預計 01:25 抵達台北"),
        ],
    )
}

fn flights() -> Vec<FlightSegment> {
    vec![
        FlightSegment::new("MM722", "TPE", "NGO", "12/18 02:55", "06:25", "2h 30m"),
        FlightSegment::new("MM723", "NGO", "TPE", "12/22 22:45", "01:25 (+1)", "3h 40m"),
    ]
}

fn emergency_contacts() -> Vec<EmergencyContact> {
    vec![
        EmergencyContact::new("日本報案", "110"),
        EmergencyContact::new("日本火警/救護", "119"),
        EmergencyContact::new("台北駐大阪辦事處", "+81-6-6227-8623"),
        EmergencyContact::new("旅外國人急難救助", "+886-800-085-095"),
    ]
}

fn souvenir_list() -> Vec<SouvenirItem> {
    vec![
        SouvenirItem::new("蝦餅 (Yukari)", "坂角総本舗，名古屋必買，機場有售"),
        SouvenirItem::new("小倉紅豆吐司抹醬", "在家也能還原名古屋早餐"),
        SouvenirItem::new("青柳外郎糕 (Uiro)", "口感像麻糬又像羊羹，推薦一口包裝"),
        SouvenirItem::new(
            "伊勢名物 赤福",
            "雖然是伊勢特產，但名古屋車站買得到，保存期限短必吃",
        ),
        SouvenirItem::new("手羽先風味餅乾", "Calbee 推出的地區限定口味"),
    ]
}
